use crate::routes::routes::AppRoutes;
use crate::shared::notify::NotificationService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the notification stack to the whole app via context.
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
    }
}
