//! Browser console reporting for the wasm boundary.
//!
//! Only `wasm32` builds talk to the console; native builds (and the test
//! harness) compile these calls away.

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}
