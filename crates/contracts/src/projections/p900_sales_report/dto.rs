use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Settled payment row as served by `POST /payments`.
///
/// Per-method amounts arrive as strings; absent or empty means zero. Only
/// the display fields of the related user/table rows are embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub total_amount: String,
    #[serde(default)]
    pub amount_paid: Option<String>,
    #[serde(default)]
    pub amount_money: Option<String>,
    #[serde(default)]
    pub amount_pix: Option<String>,
    #[serde(default)]
    pub amount_debit: Option<String>,
    #[serde(default)]
    pub amount_credit: Option<String>,

    /// ISO-8601 timestamp of the payment.
    pub created_at: String,

    #[serde(default)]
    pub user: Option<PaymentUser>,
    pub table: PaymentTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentUser {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentTable {
    pub number: String,
}

/// Payment methods the report can filter by.
///
/// The backend filters on the Portuguese label itself, so the label doubles
/// as the wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Dinheiro")]
    Money,
    #[serde(rename = "PIX")]
    Pix,
    #[serde(rename = "Débito")]
    Debit,
    #[serde(rename = "Crédito")]
    Credit,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Money,
        PaymentMethod::Pix,
        PaymentMethod::Debit,
        PaymentMethod::Credit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Money => "Dinheiro",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::Debit => "Débito",
            PaymentMethod::Credit => "Crédito",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

/// Body for `POST /payments`. `None` filters are omitted from the JSON body;
/// the backend treats a missing key as "no filter".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_payment: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub date_from: String,
    pub date_to: String,
}

/// Filter selections of the report page.
///
/// Dates are `YYYY-MM-DD` strings straight from the date inputs; both
/// default to the current day when the page mounts. Empty (placeholder)
/// selections are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    pub date_from: String,
    pub date_to: String,
    pub user_id: Option<String>,
    pub table_id: Option<String>,
    pub method: Option<PaymentMethod>,
}

impl ReportFilter {
    /// Reject an inverted or unparseable date range before anything is sent.
    pub fn validate_dates(&self) -> Result<(), String> {
        let from = NaiveDate::parse_from_str(&self.date_from, "%Y-%m-%d");
        let to = NaiveDate::parse_from_str(&self.date_to, "%Y-%m-%d");
        match (from, to) {
            (Ok(from), Ok(to)) if from <= to => Ok(()),
            _ => Err("A data inicial não pode ser maior que a data final!".into()),
        }
    }

    pub fn to_query(&self) -> PaymentsQuery {
        PaymentsQuery {
            type_payment: self.method,
            table_id: self.table_id.clone(),
            user_id: self.user_id.clone(),
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(from: &str, to: &str) -> ReportFilter {
        ReportFilter {
            date_from: from.to_string(),
            date_to: to.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_date_range_validation() {
        assert!(filter("2024-03-01", "2024-03-15").validate_dates().is_ok());
        assert!(filter("2024-03-15", "2024-03-15").validate_dates().is_ok());

        let err = filter("2024-03-16", "2024-03-15").validate_dates();
        assert_eq!(
            err,
            Err("A data inicial não pode ser maior que a data final!".to_string())
        );

        assert!(filter("", "2024-03-15").validate_dates().is_err());
        assert!(filter("15/03/2024", "2024-03-20").validate_dates().is_err());
    }

    #[test]
    fn test_query_omits_empty_filters() {
        let query = filter("2024-03-01", "2024-03-15").to_query();
        let json = serde_json::to_value(&query).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("type_payment"));
        assert!(!object.contains_key("table_id"));
        assert!(!object.contains_key("user_id"));
        assert_eq!(object["date_from"], "2024-03-01");
        assert_eq!(object["date_to"], "2024-03-15");
    }

    #[test]
    fn test_query_carries_selected_filters() {
        let mut report_filter = filter("2024-03-01", "2024-03-15");
        report_filter.method = Some(PaymentMethod::Pix);
        report_filter.table_id = Some("t7".to_string());
        report_filter.user_id = Some("u2".to_string());

        let json = serde_json::to_value(&report_filter.to_query()).unwrap();
        assert_eq!(json["type_payment"], "PIX");
        assert_eq!(json["table_id"], "t7");
        assert_eq!(json["user_id"], "u2");
    }

    #[test]
    fn test_method_labels() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_label(method.label()), Some(method));
        }
        assert_eq!(PaymentMethod::from_label("Pagamento"), None);
        assert_eq!(PaymentMethod::from_label(""), None);
    }

    #[test]
    fn test_payment_record_tolerates_sparse_rows() {
        let json = r#"{
            "id": "pay1",
            "total_amount": "45",
            "amount_pix": "45",
            "created_at": "2024-03-15T20:31:00.000Z",
            "user": null,
            "table": { "number": "4" }
        }"#;

        let record: PaymentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.amount_pix.as_deref(), Some("45"));
        assert_eq!(record.amount_money, None);
        assert!(record.user.is_none());
        assert_eq!(record.table.number, "4");
    }
}
