//! Hero image carousel with auto-advance, arrows, and indicator dots.

use leptos::prelude::*;

use crate::state::carousel::{Carousel, HERO_SLIDES};

/// Full-width hero slide show.
///
/// The auto-advance timer runs for the page's lifetime and consults the
/// carousel's pause flag, which pointer hover toggles.
#[component]
pub fn HeroCarousel() -> impl IntoView {
    let carousel = expect_context::<RwSignal<Carousel>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::carousel::AUTO_ADVANCE_MS;

        Effect::new(move || {
            gloo_timers::callback::Interval::new(AUTO_ADVANCE_MS, move || {
                carousel.update(|c| {
                    c.tick();
                });
            })
            .forget();
        });
    }

    view! {
        <section
            id="home"
            class="hero-carousel"
            on:mouseenter=move |_| carousel.update(Carousel::pause)
            on:mouseleave=move |_| carousel.update(Carousel::resume)
        >
            {HERO_SLIDES
                .iter()
                .enumerate()
                .map(|(i, slide)| {
                    view! {
                        <div
                            class=move || carousel.with(|c| c.class_for(i, "carousel-slide"))
                            style=format!("background-image: url('{}')", slide.image)
                        >
                            <div class="carousel-content">
                                <h1>{slide.title}</h1>
                                <p>{slide.caption}</p>
                                <a href="#penalties" class="btn btn--primary">"View Penalties"</a>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}

            <button
                class="carousel-prev"
                aria-label="Previous slide"
                on:click=move |_| {
                    carousel.update(|c| {
                        c.prev();
                    });
                }
            >
                "‹"
            </button>
            <button
                class="carousel-next"
                aria-label="Next slide"
                on:click=move |_| {
                    carousel.update(|c| {
                        c.next();
                    });
                }
            >
                "›"
            </button>

            <div class="carousel-dots">
                {(0..HERO_SLIDES.len())
                    .map(|i| {
                        let target = i64::try_from(i).unwrap_or(0);
                        view! {
                            <button
                                class=move || carousel.with(|c| c.class_for(i, "dot"))
                                aria-label=format!("Go to slide {}", i + 1)
                                on:click=move |_| {
                                    carousel.update(|c| {
                                        c.show_slide(target);
                                    });
                                }
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
