//! The single dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes every section of the site in scroll order and installs the
//! scroll-reveal observer once the page is mounted.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use ledger::PenaltyTable;

use crate::components::charts_panel::ChartsPanel;
use crate::components::contact_form::ContactForm;
use crate::components::detection_demo::DetectionDemo;
use crate::components::hero_carousel::HeroCarousel;
use crate::components::nav_bar::NavBar;
use crate::components::penalty_table::PenaltyTableSection;
use crate::state::penalties::PenaltySummary;
use crate::util::scroll_reveal;

/// Feature highlights: icon, title, blurb.
pub const FEATURES: [(&str, &str, &str); 4] = [
    ("📷", "Smart Detection", "Cameras flag litter as it happens across campus walkways and common areas."),
    ("🪪", "Student Matching", "Each incident is linked to a student ID so penalties reach the right person."),
    ("⚖", "Fair Penalties", "Minor and major violations carry graded fines that are easy to review."),
    ("📊", "Live Analytics", "Trends and violation mix are charted so staff can target problem spots."),
];

/// Testimonials: quote, author, role.
pub const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("The courtyard has never looked this clean.", "Nusrat Jahan", "Campus Facilities"),
    ("Seeing the fine on my record was enough to change my habits.", "Tanvir Ahmed", "Student"),
    ("The dashboard makes the weekly report a five-minute job.", "Dr. Farhana Rahman", "Student Affairs"),
];

/// Single-page dashboard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let table = expect_context::<RwSignal<PenaltyTable>>();

    Effect::new(move || match scroll_reveal::install() {
        Ok(count) => leptos::logging::log!("scroll reveal watching {count} elements"),
        Err(err) => leptos::logging::warn!("scroll reveal skipped: {err}"),
    });

    let stats = move || {
        table
            .with(|t| PenaltySummary::of(t.dataset()))
            .cards()
            .into_iter()
            .map(|(value, label)| {
                view! {
                    <div class="stat-card">
                        <span class="stat-card__value">{value}</span>
                        <span class="stat-card__label">{label}</span>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <NavBar/>
        <main>
            <HeroCarousel/>

            <section id="features" class="section features">
                <h2 class="section__title">"How It Works"</h2>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, text)| {
                            view! {
                                <article class="feature-card">
                                    <span class="feature-card__icon" aria-hidden="true">{*icon}</span>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="section stats">
                <div class="stats-grid">{stats}</div>
            </section>

            <PenaltyTableSection/>
            <ChartsPanel/>
            <DetectionDemo/>

            <section id="testimonials" class="section testimonials">
                <h2 class="section__title">"What People Say"</h2>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|(quote, author, role)| {
                            view! {
                                <blockquote class="testimonial-card">
                                    <p>{*quote}</p>
                                    <footer>
                                        <strong>{*author}</strong>
                                        <span>{*role}</span>
                                    </footer>
                                </blockquote>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <ContactForm/>
        </main>
        <footer class="site-footer">
            <p>"© 2025 Campus Litter Watch. Keep the campus clean."</p>
        </footer>
    }
}
