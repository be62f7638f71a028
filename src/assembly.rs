//! # Assembly Module
//!
//! WASM-exported entry points for the pagination calculator. They take and
//! return JSON strings so JavaScript callers can pass plain objects through
//! `JSON.stringify` / `JSON.parse`.
//!
//! ## Response shape
//!
//! On success the JSON is a serialized [`PaginationData`]:
//! `{"previous": 1, "next": 3, "buttons": [{"page": 1, "type": "first", "current": false}, ...]}`.
//!
//! On failure it is an object with a single `error` field.

use serde_json::json;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::calculator::pagination;
use crate::console;
use crate::schema::{PaginationArgs, PaginationData, PaginationError, PaginationOptions};

/// Computes the navigation bar for a JSON request.
///
/// # Parameters
///
/// * `args_json` - A JSON object with the required `current` and `last`
///                 numbers and any of the optional `first`, `windowSize`,
///                 `showFirstLast` and `showEllipsis` fields.
///
/// # Example
///
/// ```javascript
/// const data = JSON.parse(paginate(JSON.stringify({ current: 2, last: 10 })));
/// if (data.error) {
///     console.error(data.error);
/// } else {
///     render(data.buttons);
/// }
/// ```
#[wasm_bindgen]
pub fn paginate(args_json: &str) -> JsValue {
    JsValue::from_str(&paginate_json(args_json))
}

/// Computes the navigation bar from the two required numbers and optional
/// display preferences.
///
/// `options_json` may hold any of `first`, `windowSize`, `showFirstLast` and
/// `showEllipsis`. Unlike a missing value, options that fail to parse are
/// reported as an error rather than replaced with defaults.
#[wasm_bindgen]
pub fn paginate_pages(current: i64, last: i64, options_json: Option<String>) -> JsValue {
    JsValue::from_str(&paginate_pages_json(current, last, options_json.as_deref()))
}

/// JSON-in, JSON-out core of [`paginate`].
pub fn paginate_json(args_json: &str) -> String {
    match serde_json::from_str::<PaginationArgs>(args_json) {
        Ok(args) => respond(pagination(&args)),
        Err(e) => invalid_arguments(e),
    }
}

/// JSON-out core of [`paginate_pages`].
pub fn paginate_pages_json(current: i64, last: i64, options_json: Option<&str>) -> String {
    let options = match options_json {
        Some(s) => match serde_json::from_str::<PaginationOptions>(s) {
            Ok(options) => options,
            Err(e) => return invalid_arguments(e),
        },
        None => PaginationOptions::default(),
    };

    respond(pagination(&PaginationArgs::with_options(current, last, options)))
}

fn respond(result: Result<PaginationData, PaginationError>) -> String {
    match result {
        Ok(data) => match serde_json::to_string(&data) {
            Ok(s) => s,
            Err(_) => json!({"error": "serialization failed"}).to_string(),
        },
        Err(err) => {
            console::warn(&format!("pagination rejected: {}", err));
            json!({"error": err.to_string()}).to_string()
        }
    }
}

fn invalid_arguments(e: serde_json::Error) -> String {
    let message = format!("invalid arguments: {}", e);
    console::warn(&message);
    json!({"error": message}).to_string()
}
