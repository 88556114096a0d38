use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{StudyView, WheelView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StudyView)] Study {},
        #[route("/wheel", WheelView)] Wheel {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
