use leptos::prelude::*;

/// Top bar with the brand and navigation between the two admin pages.
///
/// Plain anchors are enough here: the router intercepts same-origin
/// clicks and handles them client-side.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Uni Pizza"</span>
                <nav class="header__nav">
                    <a class="header__link" href="/order">
                        "Adicionar Pedido"
                    </a>
                    <a class="header__link" href="/relatorio">
                        "Relatório de Vendas"
                    </a>
                </nav>
            </div>
        </header>
    }
}
