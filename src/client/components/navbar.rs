use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBook, FaUsers};
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "flex items-center gap-2",
                    p { class: "text-xl",
                        "Satchel"
                    }
                    p { class: "text-xs",
                        "v0.1.0"
                    }
                }
            }
            div {
                class: "navbar-end flex gap-2",
                Link { to: Route::Students {}, class: "btn btn-ghost flex gap-2",
                    Icon {
                        width: 18,
                        height: 18,
                        icon: FaUsers
                    }
                    "Students"
                }
                a { href: "/api/docs", class: "btn btn-ghost flex gap-2",
                    Icon {
                        width: 18,
                        height: 18,
                        icon: FaBook
                    }
                    "API Docs"
                }
            }
        }

        Outlet::<Route> {}
    }
}
