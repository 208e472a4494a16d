use dioxus::prelude::*;

use crate::Route;

/// Router layout: wraps every page in the shared navigation shell.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        ui::Shell {
            Outlet::<Route> {}
        }
    }
}
