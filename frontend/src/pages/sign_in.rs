use shared::Session;
use yew::prelude::*;

use crate::auth;
use crate::components::GoogleSignInButton;

#[derive(Clone, PartialEq)]
enum AuthState {
    Loading,
    LoggedOut,
    LoggedIn(Session),
}

#[function_component(SignInPanel)]
pub fn sign_in_panel() -> Html {
    let state = use_state(|| AuthState::Loading);

    // Restore a stored session before showing the widget.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            match auth::load_session() {
                Some(session) => state.set(AuthState::LoggedIn(session)),
                None => state.set(AuthState::LoggedOut),
            }
            || ()
        });
    }

    let on_credential = {
        let state = state.clone();
        Callback::from(move |id_token: String| {
            let state = state.clone();
            state.set(AuthState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match auth::exchange_credential(id_token).await {
                    Ok(session) => {
                        auth::store_session(&session);
                        log::info!("login successful");
                        state.set(AuthState::LoggedIn(session));
                    }
                    Err(e) => {
                        log::error!("login failed: {e}");
                        state.set(AuthState::LoggedOut);
                    }
                }
            });
        })
    };

    let on_widget_error = {
        let state = state.clone();
        Callback::from(move |reason: String| {
            log::error!("sign-in widget error: {reason}");
            state.set(AuthState::LoggedOut);
        })
    };

    let on_logout = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            auth::clear_session();
            log::info!("logged out");
            state.set(AuthState::LoggedOut);
        })
    };

    match &*state {
        AuthState::Loading => html! {
            <div class="signin-loading">
                <p>{ "Loading..." }</p>
            </div>
        },
        AuthState::LoggedOut => html! {
            <div class="signin-card">
                <h3>{ "Sign in to continue" }</h3>
                <p>{ "Please sign in with your Google account" }</p>
                <GoogleSignInButton on_credential={on_credential} on_error={on_widget_error} />
            </div>
        },
        AuthState::LoggedIn(session) => {
            let display_name = session
                .user
                .as_ref()
                .map(|u| u.display_name())
                .unwrap_or_else(|| "User".to_string());

            html! {
                <div class="signin-card signed-in">
                    <p class="signin-status">{ "Successfully logged in!" }</p>
                    if let Some(user) = &session.user {
                        <>
                            if !user.picture.is_empty() {
                                <img class="signin-avatar" src={user.picture.clone()} alt="Profile" />
                            }
                            <div class="signin-identity">
                                <p class="signin-welcome">{ format!("Welcome, {}!", display_name) }</p>
                                if display_name != user.email {
                                    <p class="signin-email">{ &user.email }</p>
                                }
                                <p class="signin-user-id">{ format!("User ID: {}", user.id) }</p>
                            </div>
                        </>
                    } else {
                        <p class="signin-welcome">{ format!("Welcome, {}!", display_name) }</p>
                    }
                    <button class="btn-logout" onclick={on_logout}>{ "Logout" }</button>
                </div>
            }
        }
    }
}
