use api::ApiClient;
use dioxus::prelude::*;

use ui::{AuthProvider, I18nProvider};
use views::{AppShell, Home, Login, ResetPassword, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/reset-password")]
        ResetPassword {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// The backend lives at the page's own origin in the browser; the localhost
/// fallback covers native runs against a local backend.
fn api_base() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }
    }
    "http://localhost:8080".to_string()
}

#[component]
fn App() -> Element {
    use_context_provider(|| ApiClient::new(api_base()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        AuthProvider {
            I18nProvider {
                Router::<Route> {}
            }
        }
    }
}
