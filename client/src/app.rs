//! Root application component with the HTML shell and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use ledger::TableRow;

use crate::pages::dashboard::DashboardPage;
use crate::state::{carousel::Carousel, detection::DetectionState, penalties::initial_table, ui::UiState};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
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

/// Root application component.
///
/// Owns every shared controller as an `RwSignal` context and restores the
/// stored theme once mounted in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let table = initial_table();
    let rows = RwSignal::new(table.rows());
    let table = RwSignal::new(table);
    let ui = RwSignal::new(UiState::default());
    let carousel = RwSignal::new(Carousel::default());
    let demo = RwSignal::new(DetectionState::default());

    provide_context(table);
    provide_context::<RwSignal<Vec<TableRow>>>(rows);
    provide_context(ui);
    provide_context(carousel);
    provide_context(demo);

    Effect::new(move || {
        let theme = dark_mode::read_preference();
        dark_mode::apply(theme);
        ui.update(|u| u.theme = theme);
    });

    view! {
        <Stylesheet id="leptos" href="/assets/main.css"/>
        <Title text="Campus Litter Watch"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
