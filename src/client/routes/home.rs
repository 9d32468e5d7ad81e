use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Satchel" }
        Meta {
            name: "description",
            content: "Student and pickup person records for childcare centres."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-2xl",
                    "Satchel"
                }
                p {
                    "Keep track of every child and the people allowed to collect them."
                }
                Link { to: Route::Students {}, class: "btn btn-primary w-40",
                    "View students"
                }
            }
        }
    )
}
