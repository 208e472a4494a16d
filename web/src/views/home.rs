use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Staff landing page, reachable only when authenticated.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if !session.read().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        div { class: "home-page",
            h1 { "Welcome to the Food Bank Management App!" }
            p {
                "Register a new household from the "
                Link { to: Route::Signup {}, "sign-up form" }
                "."
            }
        }
    }
}
