use contracts::usecases::u501_create_order::OrderDraft;
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::notify::NotificationService;

use super::view_model::OrderFormViewModel;

/// Order entry page: one form that opens an order against a table and
/// attaches the chosen product to it.
#[component]
pub fn CreateOrderPage() -> impl IntoView {
    let notify = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    let vm = OrderFormViewModel::new();
    vm.load_reference_data();

    let draft = vm.draft;
    let load_error = vm.load_error;
    let submitting = vm.submitting;

    let table_options = {
        let tables = vm.tables;
        Signal::derive(move || {
            tables
                .get()
                .into_iter()
                .map(|table| (table.id, table.number))
                .collect::<Vec<_>>()
        })
    };
    let product_options = {
        let products = vm.products;
        Signal::derive(move || {
            products
                .get()
                .into_iter()
                .map(|product| (product.id, product.name))
                .collect::<Vec<_>>()
        })
    };
    let user_options = {
        let users = vm.users;
        Signal::derive(move || {
            users
                .get()
                .into_iter()
                .map(|user| (user.id, user.name))
                .collect::<Vec<_>>()
        })
    };

    let can_submit = {
        let vm = vm.clone();
        Signal::derive(move || vm.can_submit()())
    };

    let on_submit = {
        let vm = vm.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit_command(notify);
        }
    };

    view! {
        <div class="page page--order">
            <div class="page__header">
                <h1 class="page__title">"Adicionar Pedido"</h1>
            </div>

            <Show when=move || load_error.get().is_some()>
                <div class="alert alert--error">
                    {move || load_error.get().unwrap_or_default()}
                </div>
            </Show>

            <form class="form form--order" on:submit=on_submit>
                <Select
                    value=Signal::derive(move || {
                        draft.with(|d| d.table_id.clone().unwrap_or_default())
                    })
                    on_change=Callback::new(move |value: String| {
                        draft.update(|d| {
                            d.table_id = if value.is_empty() { None } else { Some(value) };
                        });
                    })
                    options=table_options
                    placeholder="Selecione a mesa"
                />

                <Input
                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                    on_input=Callback::new(move |value: String| {
                        draft.update(|d| d.name = value);
                    })
                    placeholder="Digite o nome"
                    maxlength="20"
                />

                <Select
                    value=Signal::derive(move || {
                        draft.with(|d| d.product_id.clone().unwrap_or_default())
                    })
                    on_change=Callback::new(move |value: String| {
                        draft.update(|d| {
                            d.product_id = if value.is_empty() { None } else { Some(value) };
                        });
                    })
                    options=product_options
                    placeholder="Selecione o produto"
                />

                <Select
                    value=Signal::derive(move || {
                        draft.with(|d| d.user_id.clone().unwrap_or_default())
                    })
                    on_change=Callback::new(move |value: String| {
                        draft.update(|d| {
                            d.user_id = if value.is_empty() { None } else { Some(value) };
                        });
                    })
                    options=user_options
                    placeholder="Selecione o garçom"
                />

                <Input
                    value=Signal::derive(move || draft.with(|d| d.amount.clone()))
                    on_input=Callback::new(move |value: String| {
                        draft.update(|d| d.amount = OrderDraft::sanitize_amount(&value));
                    })
                    placeholder="Digite o valor total"
                />

                <Button
                    variant="green"
                    button_type="submit"
                    disabled=Signal::derive(move || !can_submit.get())
                >
                    {move || if submitting.get() { "Enviando..." } else { "Adicionar" }}
                </Button>
            </form>
        </div>
    }
}
