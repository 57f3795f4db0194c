use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::components::auth_provider::GoogleAuthConfig;
use crate::gis;

#[derive(Properties, PartialEq)]
pub struct GoogleSignInButtonProps {
    /// Fired with the raw ID token when the widget completes a sign-in.
    pub on_credential: Callback<String>,
    /// Fired when the widget responds without a credential.
    pub on_error: Callback<String>,
}

#[function_component(GoogleSignInButton)]
pub fn google_sign_in_button(props: &GoogleSignInButtonProps) -> Html {
    let config = use_context::<GoogleAuthConfig>()
        .expect("GoogleSignInButton rendered outside GoogleAuthProvider");
    let container = use_node_ref();

    {
        let container = container.clone();
        let client_id = config.client_id.clone();
        let on_credential = props.on_credential.clone();
        let on_error = props.on_error.clone();

        use_effect_with((), move |_| {
            let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
                let credential = Reflect::get(&response, &"credential".into())
                    .ok()
                    .and_then(|v| v.as_string());
                match credential {
                    Some(token) => on_credential.emit(token),
                    None => on_error.emit("credential response without a credential".to_string()),
                }
            });

            let init = Object::new();
            let _ = Reflect::set(&init, &"client_id".into(), &client_id.as_str().into());
            let _ = Reflect::set(&init, &"callback".into(), callback.as_ref());
            gis::initialize(&init);

            // The external script keeps invoking this closure for the life
            // of the page; it must never be dropped.
            callback.forget();

            if let Some(parent) = container.cast::<Element>() {
                let options = Object::new();
                let _ = Reflect::set(&options, &"type".into(), &"standard".into());
                let _ = Reflect::set(&options, &"theme".into(), &"outline".into());
                let _ = Reflect::set(&options, &"size".into(), &"large".into());
                gis::render_button(&parent, &options);
            }

            || ()
        });
    }

    html! {
        <div ref={container} class="gsi-button"></div>
    }
}
