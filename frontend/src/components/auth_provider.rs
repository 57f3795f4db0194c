use yew::prelude::*;

/// OAuth client identifier shared with every sign-in widget in the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct GoogleAuthConfig {
    pub client_id: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct GoogleAuthProviderProps {
    pub children: Children,
}

/// Wraps the app and supplies the Google OAuth client id, read from the
/// build environment. An unset id is passed through as an empty string
/// and fails only inside the external widget.
#[function_component(GoogleAuthProvider)]
pub fn google_auth_provider(props: &GoogleAuthProviderProps) -> Html {
    let config = GoogleAuthConfig {
        client_id: AttrValue::Static(option_env!("GOOGLE_CLIENT_ID").unwrap_or("")),
    };

    html! {
        <ContextProvider<GoogleAuthConfig> context={config}>
            { props.children.clone() }
        </ContextProvider<GoogleAuthConfig>>
    }
}
