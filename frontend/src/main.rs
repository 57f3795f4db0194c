use yew::prelude::*;

mod auth;
mod components;
mod gis;
mod pages;

use components::GoogleAuthProvider;
use pages::sign_in::SignInPanel;

#[function_component(App)]
fn app() -> Html {
    html! {
        <GoogleAuthProvider>
            <div class="container">
                <SignInPanel />
            </div>
        </GoogleAuthProvider>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
