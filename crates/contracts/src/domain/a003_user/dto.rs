use serde::{Deserialize, Serialize};

/// Staff user reference row as served by `GET /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,

    /// Access profile; the API keeps the legacy field name `perfil`.
    #[serde(rename = "perfil")]
    pub role: String,

    pub status: bool,
    pub is_logged: bool,
}
