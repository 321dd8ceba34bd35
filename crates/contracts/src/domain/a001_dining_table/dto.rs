use serde::{Deserialize, Serialize};

/// Dining table reference row as served by `GET /tables`.
///
/// Read-only on this side: the admin pages only pick a table, the waiter app
/// owns the status flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,

    /// Display number, kept as text ("4", "12A").
    pub number: String,

    pub status: bool,
    pub free: bool,
    pub call_waiter: bool,
    pub close_bill: bool,
}
