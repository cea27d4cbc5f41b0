//! Browser side of the upload demo: image decode and canvas drawing.
//!
//! Only compiled with `hydrate`. Decoding is an async task that resolves to
//! a [`DecodedImage`] or a [`UiError::Decode`]; the caller decides whether the
//! result is still wanted.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, File, HtmlCanvasElement, HtmlImageElement, Url};

use crate::state::detection::DetectionBox;
use crate::util::error::UiError;

const BOX_STROKE: &str = "#ff0000";
const BOX_FILL: &str = "rgba(255, 0, 0, 0.2)";
const BOX_LINE_WIDTH: f64 = 3.0;
const LABEL_FONT: &str = "16px Arial";
const LABEL_TEXT: &str = "Trash";
const LABEL_OFFSET: f64 = 5.0;

/// A fully decoded upload.
pub struct DecodedImage {
    image: HtmlImageElement,
    pub width: f64,
    pub height: f64,
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Decode `file` into an image element.
///
/// # Errors
///
/// Returns [`UiError::Decode`] when the file is not a readable image.
pub async fn decode(file: &File) -> Result<DecodedImage, UiError> {
    let url = Url::create_object_url_with_blob(file).map_err(|e| UiError::Decode(describe(&e)))?;
    let image = HtmlImageElement::new().map_err(|e| UiError::Decode(describe(&e)))?;
    image.set_src(&url);
    let decoded = JsFuture::from(image.decode()).await;
    let _ = Url::revoke_object_url(&url);
    decoded.map_err(|e| UiError::Decode(describe(&e)))?;
    let width = f64::from(image.natural_width());
    let height = f64::from(image.natural_height());
    Ok(DecodedImage { image, width, height })
}

/// Size `canvas` to the image, draw it, then overlay `boxes`.
///
/// # Errors
///
/// Returns `Err` if the 2D context is unavailable or a canvas call fails.
pub fn draw(canvas: &HtmlCanvasElement, decoded: &DecodedImage, boxes: &[DetectionBox]) -> Result<(), JsValue> {
    canvas.set_width(decoded.image.natural_width());
    canvas.set_height(decoded.image.natural_height());
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    ctx.draw_image_with_html_image_element_and_dw_and_dh(&decoded.image, 0.0, 0.0, decoded.width, decoded.height)?;

    ctx.set_stroke_style_str(BOX_STROKE);
    ctx.set_line_width(BOX_LINE_WIDTH);
    ctx.set_font(LABEL_FONT);
    for b in boxes {
        ctx.set_fill_style_str(BOX_FILL);
        ctx.stroke_rect(b.x, b.y, b.width, b.height);
        ctx.fill_rect(b.x, b.y, b.width, b.height);
        ctx.set_fill_style_str(BOX_STROKE);
        ctx.fill_text(LABEL_TEXT, b.x, b.y - LABEL_OFFSET)?;
    }
    Ok(())
}
