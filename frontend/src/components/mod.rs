mod auth_provider;
mod gsi_button;

pub use auth_provider::GoogleAuthProvider;
pub use gsi_button::GoogleSignInButton;
