use contracts::domain::a001_dining_table::DiningTable;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_user::User;
use contracts::usecases::u501_create_order::{
    AddOrderItemRequest, CreateOrderRequest, OrderDraft,
};
use leptos::logging::log;
use leptos::prelude::*;

use crate::shared::notify::NotificationService;

use super::api;

/// ViewModel for the order entry form
#[derive(Clone)]
pub struct OrderFormViewModel {
    pub draft: RwSignal<OrderDraft>,
    pub tables: RwSignal<Vec<DiningTable>>,
    pub products: RwSignal<Vec<Product>>,
    pub users: RwSignal<Vec<User>>,
    pub submitting: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
}

impl OrderFormViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(OrderDraft::default()),
            tables: RwSignal::new(Vec::new()),
            products: RwSignal::new(Vec::new()),
            users: RwSignal::new(Vec::new()),
            submitting: RwSignal::new(false),
            load_error: RwSignal::new(None),
        }
    }

    pub fn can_submit(&self) -> impl Fn() -> bool + '_ {
        move || !self.submitting.get() && self.draft.with(|draft| draft.is_complete())
    }

    /// Fetch the reference lists the selects feed on.
    pub fn load_reference_data(&self) {
        let tables = self.tables;
        let products = self.products;
        let users = self.users;
        let load_error = self.load_error;

        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_tables().await {
                Ok(list) => tables.set(list),
                Err(e) => {
                    log!("Failed to fetch tables: {}", e);
                    load_error.set(Some(format!("Erro ao carregar mesas: {}", e)));
                }
            }

            match api::fetch_products().await {
                Ok(list) => products.set(list),
                Err(e) => {
                    log!("Failed to fetch products: {}", e);
                    load_error.set(Some(format!("Erro ao carregar produtos: {}", e)));
                }
            }

            match api::fetch_users().await {
                Ok(list) => users.set(list),
                Err(e) => {
                    log!("Failed to fetch users: {}", e);
                    load_error.set(Some(format!("Erro ao carregar garçons: {}", e)));
                }
            }
        });
    }

    /// Create the order, then attach the selected product to it.
    ///
    /// The two calls are sequential and not transactional: when the
    /// second one fails the order header stays created on the backend
    /// and only the error notification tells the operator.
    pub fn submit_command(&self, notify: NotificationService) {
        if self.submitting.get() {
            return;
        }

        let current = self.draft.get();
        if let Err(message) = current.validate() {
            notify.error(message);
            return;
        }

        // validate() passed, so both selections are present.
        let price = match self.products.with(|products| {
            products
                .iter()
                .find(|product| Some(product.id.as_str()) == current.product_id.as_deref())
                .map(|product| product.price)
        }) {
            Some(price) => price,
            None => {
                notify.error("Erro ao cadastrar pedido! Erro: produto não encontrado");
                return;
            }
        };

        let request = CreateOrderRequest {
            name: current.name.clone(),
            table_id: current.table_id.clone().unwrap_or_default(),
            amount: current.amount.clone(),
        };
        let product_id = current.product_id.clone().unwrap_or_default();

        let draft = self.draft;
        let submitting = self.submitting;
        submitting.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            match api::create_order(&request).await {
                Ok(created) => {
                    let item = AddOrderItemRequest {
                        order_id: created.id.clone(),
                        product_id,
                        amount: price,
                    };
                    match api::add_order_item(&item).await {
                        Ok(()) => {
                            notify.success(format!(
                                "Pedido {} cadastrado com sucesso!",
                                created.id
                            ));
                            draft.set(OrderDraft::default());
                        }
                        Err(e) => {
                            notify.error(format!("Erro ao cadastrar pedido! Erro: {}", e));
                        }
                    }
                }
                Err(e) => {
                    notify.error(format!("Erro ao cadastrar pedido! Erro: {}", e));
                }
            }
            submitting.set(false);
        });
    }
}
