//! Bindings to the Google Identity Services script
//! (https://accounts.google.com/gsi/client), which index.html loads
//! before the app starts.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// Configures the widget with a client id and credential callback.
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"])]
    pub fn initialize(config: &JsValue);

    /// Renders the sign-in button into the given element.
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
    pub fn render_button(parent: &Element, options: &JsValue);
}
