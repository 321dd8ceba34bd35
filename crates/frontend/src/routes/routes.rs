use crate::layout::footer::Footer;
use crate::layout::header::Header;
use crate::projections::p900_sales_report::ui::list::SalesReportList;
use crate::shared::notify::NotificationHost;
use crate::usecases::u501_create_order::view::CreateOrderPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <NotificationHost />
            <main class="main" data-zone="center">
                <Routes fallback=|| view! { <CreateOrderPage /> }>
                    <Route path=path!("/") view=CreateOrderPage />
                    <Route path=path!("/order") view=CreateOrderPage />
                    <Route path=path!("/relatorio") view=SalesReportList />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
