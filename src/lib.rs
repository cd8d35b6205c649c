pub mod app;
pub mod error;
pub mod faq {
    pub mod answer;
    pub mod catalog;
    pub mod counts;
    pub mod filter;
    pub mod models;
    pub mod role;
    pub mod search;
    pub mod visibility;
}
pub mod tickets {
    pub mod client;
    pub mod models;
}
pub mod components {
    pub mod category_filter;
    pub mod faq_accordion;
    pub mod faq_page;
    pub mod search_bar;
    pub mod search_page;
}
pub mod api {
    pub mod errors;
    pub mod faqs;
    pub mod search;
}
#[cfg(feature = "ssr")]
pub mod state;

#[cfg(feature = "ssr")]
pub mod routes {
    use axum::routing::get;
    use axum::Router;

    use crate::api;
    use crate::state::AppState;

    /// JSON API routes, without the Leptos SSR pages.
    pub fn api_router() -> Router<AppState> {
        Router::new()
            .route("/api/v1/faqs", get(api::faqs::list_faqs_handler))
            .route(
                "/api/v1/faqs/categories",
                get(api::faqs::category_counts_handler),
            )
            .route("/api/v1/faqs/{id}", get(api::faqs::get_faq_handler))
            .route("/api/v1/search", get(api::search::search_handler))
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
