use serde::{Deserialize, Serialize};

use super::dto::{PaymentMethod, PaymentRecord};
use crate::shared::format::{format_currency, format_currency_num, format_date_br};

pub const REPORT_COLUMNS: usize = 8;

/// Column captions, in render order.
pub const REPORT_HEADER: [&str; REPORT_COLUMNS] = [
    "Usuário", "Mesa", "Dinheiro", "PIX", "Débito", "Crédito", "Data", "Valor",
];

/// Page margins in points (left, top, right, bottom), A4 landscape.
pub const PAGE_MARGINS: [f32; 4] = [15.0, 50.0, 15.0, 40.0];
pub const TITLE_FONT_SIZE: f32 = 25.0;
pub const BODY_FONT_SIZE: f32 = 12.0;

/// Layout description of the sales report, independent of the PDF engine.
///
/// Everything user-visible is already formatted: the renderer only places
/// strings, it never looks back into the payment rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReportDocument {
    /// Repeated at the top of every page.
    pub title: String,
    /// One entry per payment, each with [`REPORT_COLUMNS`] display cells.
    pub rows: Vec<[String; REPORT_COLUMNS]>,
    /// Sum of `total_amount` over all rows; unparseable values count as zero.
    pub grand_total: f64,
    /// Left part of the per-page footer; the renderer appends the
    /// "Página {n} de {m}" counter.
    pub footer_note: String,
}

/// Turn the raw payment rows plus the active filters into the report
/// description.
pub fn build_sales_report(
    payments: &[PaymentRecord],
    date_from: &str,
    date_to: &str,
    method: Option<PaymentMethod>,
) -> SalesReportDocument {
    let method_part = method
        .map(|m| format!(" - {}", m.label()))
        .unwrap_or_default();
    let title = format!(
        "Uni Pizza - Relatório de Vendas{} - ({} - {})",
        method_part,
        format_date_br(date_from),
        format_date_br(date_to),
    );

    let mut grand_total = 0.0;
    let mut rows = Vec::with_capacity(payments.len());
    for payment in payments {
        grand_total += payment.total_amount.parse::<f64>().unwrap_or(0.0);
        rows.push([
            payment
                .user
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_default(),
            format!("Mesa {}", payment.table.number),
            amount_cell(&payment.amount_money),
            amount_cell(&payment.amount_pix),
            amount_cell(&payment.amount_debit),
            amount_cell(&payment.amount_credit),
            format_date_br(&payment.created_at),
            format_currency(&payment.total_amount),
        ]);
    }

    let footer_note = format!("Valor Total: {}", format_currency_num(grand_total));

    SalesReportDocument {
        title,
        rows,
        grand_total,
        footer_note,
    }
}

fn amount_cell(amount: &Option<String>) -> String {
    format_currency(amount.as_deref().unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::p900_sales_report::dto::{PaymentTable, PaymentUser};

    fn payment(total: &str, pix: Option<&str>) -> PaymentRecord {
        PaymentRecord {
            id: "pay1".to_string(),
            total_amount: total.to_string(),
            amount_paid: None,
            amount_money: None,
            amount_pix: pix.map(str::to_string),
            amount_debit: None,
            amount_credit: None,
            created_at: "2024-03-15T20:31:00.000Z".to_string(),
            user: Some(PaymentUser {
                name: "Maria".to_string(),
            }),
            table: PaymentTable {
                number: "4".to_string(),
            },
        }
    }

    #[test]
    fn test_grand_total_and_footer() {
        let payments = [payment("10", None), payment("20", None)];
        let document = build_sales_report(&payments, "2024-03-01", "2024-03-15", None);

        assert_eq!(document.grand_total, 30.0);
        assert_eq!(document.footer_note, "Valor Total: R$ 30,00");
    }

    #[test]
    fn test_unparseable_total_counts_as_zero() {
        let payments = [payment("10", None), payment("abc", None)];
        let document = build_sales_report(&payments, "2024-03-01", "2024-03-15", None);
        assert_eq!(document.grand_total, 10.0);
    }

    #[test]
    fn test_title_without_method() {
        let document = build_sales_report(&[], "2024-03-01", "2024-03-15", None);
        assert_eq!(
            document.title,
            "Uni Pizza - Relatório de Vendas - (01/03/2024 - 15/03/2024)"
        );
    }

    #[test]
    fn test_title_with_method() {
        let document =
            build_sales_report(&[], "2024-03-01", "2024-03-15", Some(PaymentMethod::Debit));
        assert_eq!(
            document.title,
            "Uni Pizza - Relatório de Vendas - Débito - (01/03/2024 - 15/03/2024)"
        );
    }

    #[test]
    fn test_row_cells() {
        let payments = [payment("45", Some("45"))];
        let document = build_sales_report(&payments, "2024-03-01", "2024-03-15", None);

        let row = &document.rows[0];
        assert_eq!(row[0], "Maria");
        assert_eq!(row[1], "Mesa 4");
        assert_eq!(row[2], "R$ 0,00");
        assert_eq!(row[3], "R$ 45,00");
        assert_eq!(row[4], "R$ 0,00");
        assert_eq!(row[5], "R$ 0,00");
        assert_eq!(row[6], "15/03/2024");
        assert_eq!(row[7], "R$ 45,00");
    }

    #[test]
    fn test_missing_user_renders_empty() {
        let mut record = payment("45", None);
        record.user = None;
        let document = build_sales_report(&[record], "2024-03-01", "2024-03-15", None);
        assert_eq!(document.rows[0][0], "");
    }

    #[test]
    fn test_fractional_total_formatting() {
        let payments = [payment("10.5", None), payment("20", None)];
        let document = build_sales_report(&payments, "2024-03-01", "2024-03-15", None);
        assert_eq!(document.footer_note, "Valor Total: R$ 30.5,00");
    }
}
