use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, NotFound, Students, ViewStudent},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/students")]
    Students {},

    #[route("/view-student/:id")]
    ViewStudent { id: i32 },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
