//! Contact form. Submissions are validated, logged, and acknowledged; nothing
//! leaves the browser.

use leptos::logging::log;
use leptos::prelude::*;

use crate::state::contact::{ACKNOWLEDGEMENT, ContactDraft, ContactField};

#[component]
pub fn ContactForm() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(outcome) = draft.try_update(ContactDraft::submit) else {
            return;
        };
        if let Ok(submission) = outcome {
            log!("{}", submission.log_line());
            acknowledge();
        }
    };

    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">"Contact Us"</h2>
            <form id="contact-form" class="contact-form" on:submit=on_submit novalidate=true>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="Your Name"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.edit(ContactField::Name, value));
                    }
                />
                <input
                    id="contact-email"
                    type="email"
                    placeholder="Your Email"
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.edit(ContactField::Email, value));
                    }
                />
                <textarea
                    id="contact-message"
                    placeholder="Your Message"
                    rows="5"
                    prop:value=move || draft.with(|d| d.message.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.edit(ContactField::Message, value));
                    }
                ></textarea>
                {move || {
                    draft
                        .with(|d| d.error)
                        .map(|err| view! { <p class="contact-form__error" role="alert">{err.to_string()}</p> })
                }}
                <button type="submit" class="btn btn--primary">
                    "Send Message"
                </button>
            </form>
        </section>
    }
}

fn acknowledge() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(ACKNOWLEDGEMENT);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    log!("{ACKNOWLEDGEMENT}");
}
