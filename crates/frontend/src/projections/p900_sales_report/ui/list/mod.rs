mod state;

use contracts::projections::p900_sales_report::document::build_sales_report;
use contracts::projections::p900_sales_report::dto::PaymentMethod;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::projections::p900_sales_report::api;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::notify::NotificationService;
use crate::shared::pdf;

use state::create_state;

/// Sales report page: a filter over settled payments that renders the
/// matching records into a PDF opened in a new tab.
#[component]
pub fn SalesReportList() -> impl IntoView {
    let notify = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    let state = create_state();

    let (tables, set_tables) = signal(Vec::new());
    let (users, set_users) = signal(Vec::new());

    // Reference lists for the filter selects. A failed fetch only costs
    // the corresponding select its options, so it is logged, not raised.
    Effect::new(move || {
        spawn_local(async move {
            match api::fetch_tables().await {
                Ok(list) => set_tables.set(list),
                Err(e) => log!("Failed to fetch tables: {}", e),
            }

            match api::fetch_users().await {
                Ok(list) => set_users.set(list),
                Err(e) => log!("Failed to fetch users: {}", e),
            }
        });
    });

    let user_options = Signal::derive(move || {
        users
            .get()
            .into_iter()
            .map(|user| (user.id, user.name))
            .collect::<Vec<(String, String)>>()
    });
    let method_options = Signal::derive(|| {
        PaymentMethod::ALL
            .into_iter()
            .map(|method| (method.label().to_string(), method.label().to_string()))
            .collect::<Vec<(String, String)>>()
    });
    let table_options = Signal::derive(move || {
        tables
            .get()
            .into_iter()
            .map(|table| (table.id, format!("Mesa {}", table.number)))
            .collect::<Vec<(String, String)>>()
    });

    let generate = move || {
        if state.with_untracked(|s| s.generating) {
            return;
        }

        let filter = state.with_untracked(|s| s.filter.clone());
        if let Err(message) = filter.validate_dates() {
            notify.error(message);
            return;
        }

        state.update(|s| s.generating = true);

        spawn_local(async move {
            match api::fetch_payments(&filter.to_query()).await {
                Ok(payments) => {
                    if payments.is_empty() {
                        notify.error("Não foi encontrado resultados para o filtro informado!");
                    } else {
                        let document = build_sales_report(
                            &payments,
                            &filter.date_from,
                            &filter.date_to,
                            filter.method,
                        );
                        let opened = pdf::render(&document)
                            .and_then(|bytes| pdf::open_in_new_tab(&bytes));
                        if let Err(e) = opened {
                            log!("Failed to produce the report PDF: {}", e);
                            notify.error(format!("Erro ao gerar o PDF: {}", e));
                        }
                    }
                }
                Err(e) => {
                    log!("Failed to fetch payments: {}", e);
                    notify.error(format!("Erro ao buscar pagamentos: {}", e));
                }
            }
            state.update(|s| s.generating = false);
        });
    };

    view! {
        <div class="page page--report">
            <div class="page__header">
                <h1 class="page__title">"Relatório de Vendas"</h1>
            </div>

            <div class="filter-panel">
                <Select
                    value=Signal::derive(move || {
                        state.with(|s| s.filter.user_id.clone().unwrap_or_default())
                    })
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| {
                            s.filter.user_id = if value.is_empty() { None } else { Some(value) };
                        });
                    })
                    options=user_options
                    placeholder="Usuário"
                />

                <Select
                    value=Signal::derive(move || {
                        state.with(|s| {
                            s.filter
                                .method
                                .map(|method| method.label().to_string())
                                .unwrap_or_default()
                        })
                    })
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| s.filter.method = PaymentMethod::from_label(&value));
                    })
                    options=method_options
                    placeholder="Pagamento"
                />

                <Select
                    value=Signal::derive(move || {
                        state.with(|s| s.filter.table_id.clone().unwrap_or_default())
                    })
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| {
                            s.filter.table_id = if value.is_empty() { None } else { Some(value) };
                        });
                    })
                    options=table_options
                    placeholder="Mesa"
                />

                <Input
                    input_type="date"
                    value=Signal::derive(move || state.with(|s| s.filter.date_from.clone()))
                    on_input=Callback::new(move |value: String| {
                        state.update(|s| s.filter.date_from = value);
                    })
                />

                <Input
                    input_type="date"
                    value=Signal::derive(move || state.with(|s| s.filter.date_to.clone()))
                    on_input=Callback::new(move |value: String| {
                        state.update(|s| s.filter.date_to = value);
                    })
                />

                <Button
                    variant="green"
                    title="Baixar relatório"
                    disabled=Signal::derive(move || state.with(|s| s.generating))
                    on_click=Callback::new(move |_| generate())
                >
                    {move || if state.with(|s| s.generating) {
                        "Gerando..."
                    } else {
                        "Baixar relatório"
                    }}
                </Button>
            </div>
        </div>
    }
}
