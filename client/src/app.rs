//! Root component and SSR document shell.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the UI chrome state and hands it to pages through context, so
//! leaf components like the sidebar stay prop-driven and stateless.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::pages::analysis::AnalysisPage;
use crate::state::ui::UiState;

/// HTML document wrapper used by the server when rendering a request.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/stocksight.css"/>
        <Title text="Stocksight"/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AnalysisPage/>
            </Routes>
        </Router>
    }
}
