use serde::{Deserialize, Serialize};

/// Upper bound the order form enforces on the customer name input.
pub const MAX_CUSTOMER_NAME_LEN: usize = 20;

/// Client-side draft of a new dine-in order.
///
/// Selections are keyed by the reference row id, never by list position;
/// display values are looked up from the loaded lists at render time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderDraft {
    /// Free-text customer name, may stay empty.
    pub name: String,
    pub table_id: Option<String>,
    pub product_id: Option<String>,
    /// Waiter handling the order. Held in the draft but not sent on the
    /// wire; the API derives the responsible user from the session.
    pub user_id: Option<String>,
    /// Digits-only total, as typed. Sent as-is in `CreateOrderRequest`.
    pub amount: String,
}

impl OrderDraft {
    /// Strip everything but ASCII digits from an amount input event value.
    pub fn sanitize_amount(value: &str) -> String {
        value.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Validate the draft before submission.
    pub fn validate(&self) -> Result<(), String> {
        if self.table_id.is_none() {
            return Err("Selecione a mesa!".into());
        }
        if self.product_id.is_none() {
            return Err("Selecione o produto!".into());
        }
        if self.amount.trim().is_empty() {
            return Err("Informe o valor total!".into());
        }
        if self.name.chars().count() > MAX_CUSTOMER_NAME_LEN {
            return Err("O nome pode ter no máximo 20 caracteres!".into());
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> OrderDraft {
        OrderDraft {
            name: "João".to_string(),
            table_id: Some("t1".to_string()),
            product_id: Some("p1".to_string()),
            user_id: None,
            amount: "45".to_string(),
        }
    }

    #[test]
    fn test_sanitize_amount() {
        assert_eq!(OrderDraft::sanitize_amount("123"), "123");
        assert_eq!(OrderDraft::sanitize_amount("12a3"), "123");
        assert_eq!(OrderDraft::sanitize_amount("R$ 45,00"), "4500");
        assert_eq!(OrderDraft::sanitize_amount("abc"), "");
    }

    #[test]
    fn test_complete_draft_validates() {
        assert!(complete_draft().validate().is_ok());
        assert!(complete_draft().is_complete());
    }

    #[test]
    fn test_empty_name_is_allowed() {
        let mut draft = complete_draft();
        draft.name = String::new();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_missing_selections_rejected() {
        let mut draft = complete_draft();
        draft.table_id = None;
        assert_eq!(draft.validate(), Err("Selecione a mesa!".to_string()));

        let mut draft = complete_draft();
        draft.product_id = None;
        assert_eq!(draft.validate(), Err("Selecione o produto!".to_string()));

        let mut draft = complete_draft();
        draft.amount = String::new();
        assert!(draft.validate().is_err());
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_name_length_limit() {
        let mut draft = complete_draft();
        draft.name = "x".repeat(MAX_CUSTOMER_NAME_LEN);
        assert!(draft.validate().is_ok());

        draft.name = "x".repeat(MAX_CUSTOMER_NAME_LEN + 1);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_reset_draft_is_incomplete() {
        assert!(!OrderDraft::default().is_complete());
    }
}
