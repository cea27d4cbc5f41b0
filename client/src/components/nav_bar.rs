//! Site header with brand, in-page navigation, theme switch, and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header stays fixed above every section. On narrow screens the nav list
//! collapses behind the menu button; following any link closes it again.

use leptos::prelude::*;

use crate::state::ui::{NAV_LINKS, UiState};

/// Fixed page header.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_theme_change = move |_| {
        let current = ui.get_untracked().theme;
        let next = crate::util::dark_mode::toggle(current);
        ui.update(|u| u.theme = next);
    };

    view! {
        <header class="navbar">
            <a href="#home" class="navbar__brand">
                <span class="navbar__logo" aria-hidden="true">"♻"</span>
                "Campus Litter Watch"
            </a>

            <ul class=move || ui.with(|u| u.menu_class("nav-menu"))>
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a href={*href} on:click=move |_| ui.update(UiState::close_menu)>
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <label class="theme-switch" title="Toggle dark mode">
                <input
                    id="theme-switch"
                    type="checkbox"
                    prop:checked=move || ui.get().theme.is_dark()
                    on:change=on_theme_change
                />
                <span class="theme-switch__slider"></span>
            </label>

            <button
                class=move || ui.with(|u| u.menu_class("mobile-menu-btn"))
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(UiState::toggle_menu)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
        </header>
    }
}
