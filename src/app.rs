use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::hooks::use_query_map;
use leptos_router::path;

use crate::components::faq_page::FaqPage;
use crate::components::search_page::SearchPage;
use crate::faq::catalog::FaqCatalog;
use crate::faq::role::ViewerRole;

/// HTML document wrapper used for server-side rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Pages render the built-in dataset on both server and client so
    // hydration always sees the same entries.
    provide_context(FaqCatalog::shared());

    view! {
        <Stylesheet id="leptos" href="/pkg/helpdesk.css" />
        <Title text="IT Helpdesk - FAQs" />

        <Router>
            <nav class="top-nav">
                <div class="logo">"IT Helpdesk"</div>
                <a href="/faqs">"FAQs"</a>
                <a href="/search">"Search"</a>
            </nav>
            <main>
                <Routes fallback=|| view! { "Page not found." }.into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/faqs") view=FaqRoute />
                    <Route path=path!("/search") view=SearchPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <h1>"IT Helpdesk"</h1>
        <p>"Browse the FAQs or search your tickets before raising a new request."</p>
    }
}

/// `/faqs?role=student|staff`. The role only narrows which entries are shown.
#[component]
fn FaqRoute() -> impl IntoView {
    let query = use_query_map();
    let role = Signal::derive(move || {
        query.with(|params| ViewerRole::normalize(params.get("role").as_deref()))
    });

    view! { <FaqPage role=role /> }
}
