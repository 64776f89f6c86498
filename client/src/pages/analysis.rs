//! Analysis page: sidebar navigation plus the active view.
//!
//! ARCHITECTURE
//! ============
//! The page is the sidebar's parent. It reads `UiState` from context, renders
//! the sidebar from it and applies the sidebar's requests back onto it.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::state::ui::{UiState, ViewSelection};

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let active_view = Signal::derive(move || ui.get().active_view);
    let is_open = Signal::derive(move || ui.get().sidebar_open);

    let on_view_change = Callback::new(move |view: ViewSelection| {
        leptos::logging::log!("switching to {} view", view.as_str());
        ui.update(|u| u.select_view(view));
    });
    let on_toggle = Callback::new(move |()| ui.update(UiState::toggle_sidebar));

    view! {
        <div class="analysis-page">
            <Sidebar
                active_view=active_view
                on_view_change=on_view_change
                is_open=is_open
                on_toggle=on_toggle
            />
            <main class="analysis-page__main">
                <h1 class="analysis-page__title">{move || active_view.get().label()}</h1>
                <p class="analysis-page__summary">{move || view_summary(active_view.get())}</p>
            </main>
        </div>
    }
}

/// One-line description shown under the view heading.
fn view_summary(view: ViewSelection) -> &'static str {
    match view {
        ViewSelection::Stock => "Closing prices and trend line for a single ticker.",
        ViewSelection::Hedge => "Correlation and hedge ratio between two tickers.",
    }
}
