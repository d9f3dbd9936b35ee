//! Portal route: session-guarded wrapper around the shared portal view.

use dioxus::prelude::*;
use ui::{use_session, views::PortalView};

use crate::Route;

#[component]
pub fn Portal() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let state = session();
    if state.loading {
        return rsx! {
            div { class: "boot-screen", "Loading..." }
        };
    }
    if !state.session.logged_in {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        PortalView {
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
