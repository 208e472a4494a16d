use dioxus::prelude::*;

use crate::auth::use_session;
use crate::LogoutButton;

/// Navigation shell: brand, portal links, and the routed content below.
/// Platform crates pass their router `Outlet` as children.
#[component]
pub fn Shell(children: Element) -> Element {
    let session = use_session();

    rsx! {
        div { class: "app-shell",
            nav { class: "navbar",
                span { class: "navbar-brand", "Community Cupboard" }
                div { class: "navbar-links",
                    a { class: "navbar-link", href: "#", "Dashboard" }
                    a { class: "navbar-link", href: "#", "Food Banks" }
                    a { class: "navbar-link", href: "#", "Visits" }
                    a { class: "navbar-link", href: "#", "Items" }
                    if session.read().is_authenticated() {
                        LogoutButton { class: "navbar-link navbar-logout" }
                    }
                }
            }
            main { class: "content",
                {children}
            }
        }
    }
}
