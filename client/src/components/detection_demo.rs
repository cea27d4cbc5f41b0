//! Upload demo: pick an image, draw it with simulated trash boxes, and show
//! a canned detection result.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decoding is asynchronous. Each upload takes a request token from
//! [`DetectionState::begin`]; a decode that finishes after a newer upload or a
//! reset finds its token stale and is dropped without touching the canvas.

use leptos::prelude::*;

use crate::state::detection::DetectionState;


#[component]
pub fn DetectionDemo() -> impl IntoView {
    let demo = expect_context::<RwSignal<DetectionState>>();
    let file_ref = NodeRef::<leptos::html::Input>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let open_picker = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_ref.get_untracked() {
                input.click();
            }
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let Some(token) = demo.try_update(DetectionState::begin) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let decoded = match crate::util::detection_canvas::decode(&file).await {
                    Ok(decoded) => decoded,
                    Err(err) => {
                        leptos::logging::warn!("upload ignored: {err}");
                        return;
                    }
                };
                let mut rand = js_sys::Math::random;
                let outcome = crate::state::detection::simulate(decoded.width, decoded.height, &mut rand);
                if !demo.try_update(|d| d.apply(token, &outcome)).unwrap_or(false) {
                    return;
                }
                let Some(canvas) = canvas_ref.get_untracked() else {
                    return;
                };
                if let Err(err) = crate::util::detection_canvas::draw(&canvas, &decoded, &outcome.boxes) {
                    leptos::logging::warn!("canvas draw failed: {err:?}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_reset = move |_| {
        demo.update(DetectionState::reset);
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_ref.get_untracked() {
                input.set_value("");
            }
        }
    };

    let canvas_visible = move || demo.with(|d| d.canvas_visible);

    view! {
        <section id="demo" class="section demo">
            <h2 class="section__title">"Try the Detection Demo"</h2>
            <div class="demo__layout">
                <div class="demo__stage">
                    <input
                        node_ref=file_ref
                        id="image-upload"
                        type="file"
                        accept="image/*"
                        hidden=true
                        on:change=on_file
                    />
                    <div class="demo__buttons">
                        <button id="upload-btn" class="btn btn--primary" on:click=open_picker>
                            "Upload Image"
                        </button>
                        <button id="reset-btn" class="btn" on:click=on_reset>
                            "Reset"
                        </button>
                    </div>
                    <div class="upload-placeholder" class:hidden=canvas_visible>
                        <p>"Upload a campus photo to run detection."</p>
                    </div>
                    <canvas
                        node_ref=canvas_ref
                        id="detection-canvas"
                        class:hidden=move || !canvas_visible()
                    ></canvas>
                </div>

                <div class="demo__results">
                    <h3>"Detection Results"</h3>
                    // Keyed on the animation sequence so every applied result
                    // mounts a fresh panel and the fade-in runs again.
                    <For each=move || [demo.with(|d| d.animation_seq)] key=|seq| *seq let:_seq>
                        <dl class="results-grid fade-in">
                            {demo
                                .with_untracked(DetectionState::result_cells)
                                .into_iter()
                                .enumerate()
                                .map(|(i, (id, _))| {
                                    view! {
                                        <div class="result-item">
                                            <dt>{result_label(id)}</dt>
                                            <dd id=id>{move || demo.with(|d| d.result_cells()[i].1.clone())}</dd>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </dl>
                    </For>
                </div>
            </div>
        </section>
    }
}

fn result_label(id: &str) -> &'static str {
    match id {
        "trash-count" => "Trash Items",
        "violation-level" => "Violation Level",
        "penalty-points" => "Penalty Points",
        _ => "Student ID",
    }
}
