use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Login, Portal};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/portal")]
    Portal {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` based on the restored session.
#[component]
fn Root() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    if !session().loading {
        if session().session.logged_in {
            nav.replace(Route::Portal {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
