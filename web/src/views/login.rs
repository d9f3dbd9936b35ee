//! Login route: hosts the shared auth card.

use dioxus::prelude::*;
use ui::{use_session, views::AuthView};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // If already signed in, skip straight to the portal.
    if !session().loading && session().session.logged_in {
        nav.replace(Route::Portal {});
    }

    rsx! {
        AuthView {
            on_authenticated: move |_| {
                nav.replace(Route::Portal {});
            },
        }
    }
}
