//! Collapsible sidebar for switching between analysis views.
//!
//! DESIGN
//! ======
//! The sidebar is prop-driven: it reads the active view and open flag from its
//! caller and reports clicks back through two callbacks. Picking a view also
//! requests a toggle so the panel closes behind the selection.

use leptos::prelude::*;

use crate::state::ui::ViewSelection;

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Every interaction the sidebar can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarAction {
    /// Hamburger button.
    Toggle,
    /// Close button inside the panel.
    Close,
    /// Navigation entry for a view.
    Select(ViewSelection),
}

impl SidebarAction {
    /// Stable name rendered as the button's `data-action`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Close => "close",
            Self::Select(ViewSelection::Stock) => "select:stock",
            Self::Select(ViewSelection::Hedge) => "select:hedge",
        }
    }
}

/// Sidebar with a persistent hamburger toggle and a collapsible view list.
#[component]
pub fn Sidebar(
    #[prop(into)] active_view: Signal<ViewSelection>,
    on_view_change: Callback<ViewSelection>,
    #[prop(into)] is_open: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let fire = move |action: SidebarAction| {
        dispatch(action, |view| on_view_change.run(view), || on_toggle.run(()));
    };

    let entries = ViewSelection::ALL
        .into_iter()
        .map(move |entry| {
            let action = entry_action(entry);
            view! {
                <li>
                    <button
                        class=move || entry_class(entry, active_view.get())
                        data-action=action.name()
                        on:click=move |_| fire(action)
                    >
                        {entry.label()}
                    </button>
                </li>
            }
        })
        .collect_view();

    let toggle = SidebarAction::Toggle;
    let close = SidebarAction::Close;

    view! {
        <div class="sidebar-host">
            <button
                class="sidebar-toggle"
                data-action=toggle.name()
                on:click=move |_| fire(toggle)
                title="Toggle sidebar"
                aria-label="Toggle sidebar"
            >
                "☰"
            </button>
            <nav class=move || panel_class(is_open.get())>
                <div class="sidebar__header">
                    <span class="sidebar__title">"Views"</span>
                    <button
                        class="sidebar__close"
                        data-action=close.name()
                        on:click=move |_| fire(close)
                        title="Close sidebar"
                        aria-label="Close sidebar"
                    >
                        "✕"
                    </button>
                </div>
                <ul class="sidebar__entries">{entries}</ul>
            </nav>
        </div>
    }
}

/// Forward a sidebar action to the caller's callbacks.
///
/// A selection reports the view first and then requests a toggle; the toggle
/// and close controls only request a toggle.
pub fn dispatch(action: SidebarAction, on_view_change: impl FnOnce(ViewSelection), on_toggle: impl FnOnce()) {
    if let SidebarAction::Select(view) = action {
        on_view_change(view);
    }
    on_toggle();
}

/// Action sent by the navigation entry for `entry`.
pub fn entry_action(entry: ViewSelection) -> SidebarAction {
    SidebarAction::Select(entry)
}

pub fn panel_class(is_open: bool) -> &'static str {
    if is_open { "sidebar sidebar--open" } else { "sidebar" }
}

pub fn entry_is_active(entry: ViewSelection, active_view: ViewSelection) -> bool {
    entry == active_view
}

pub fn entry_class(entry: ViewSelection, active_view: ViewSelection) -> &'static str {
    if entry_is_active(entry, active_view) {
        "sidebar__entry sidebar__entry--active"
    } else {
        "sidebar__entry"
    }
}
