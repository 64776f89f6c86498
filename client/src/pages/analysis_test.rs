use super::*;

#[test]
fn view_summary_differs_per_view() {
    assert_ne!(view_summary(ViewSelection::Stock), view_summary(ViewSelection::Hedge));
}

#[test]
fn view_summary_mentions_ticker_scope() {
    assert!(view_summary(ViewSelection::Stock).contains("single ticker"));
    assert!(view_summary(ViewSelection::Hedge).contains("two tickers"));
}

#[cfg(feature = "ssr")]
#[test]
fn page_renders_sidebar_and_active_view_heading() {
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(RwSignal::new(UiState { active_view: ViewSelection::Hedge, sidebar_open: true }));
        view! { <AnalysisPage/> }.to_html()
    });
    assert!(html.contains("sidebar--open"));
    assert!(html.contains("analysis-page__title"));
    assert!(html.contains(view_summary(ViewSelection::Hedge)));
}
