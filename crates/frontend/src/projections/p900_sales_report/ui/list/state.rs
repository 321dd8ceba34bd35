use contracts::projections::p900_sales_report::dto::ReportFilter;
use leptos::prelude::*;

use crate::shared::date_utils::today_ymd;

/// Reactive state behind the report page.
///
/// The filter is deliberately not persisted: both dates default to the
/// current day on every visit, which is what the cashier closing a shift
/// expects to see.
#[derive(Clone, Debug)]
pub struct ReportPageState {
    pub filter: ReportFilter,
    /// Single-flight guard; one PDF generation at a time.
    pub generating: bool,
}

impl Default for ReportPageState {
    fn default() -> Self {
        let today = today_ymd();
        Self {
            filter: ReportFilter {
                date_from: today.clone(),
                date_to: today,
                user_id: None,
                table_id: None,
                method: None,
            },
            generating: false,
        }
    }
}

pub fn create_state() -> RwSignal<ReportPageState> {
    RwSignal::new(ReportPageState::default())
}
