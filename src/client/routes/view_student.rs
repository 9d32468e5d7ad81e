use dioxus::document::Title;
use dioxus::prelude::*;
use satchel::model::student::{photo_url, StudentDetailDto};

use crate::client::{components::Page, router::Route};

#[component]
pub fn ViewStudent(id: i32) -> Element {
    #[cfg(feature = "web")]
    let student = use_resource(move || async move { crate::client::util::api::get_student(id).await });
    #[cfg(feature = "web")]
    let state = student.read().clone();
    #[cfg(not(feature = "web"))]
    let state: Option<Result<StudentDetailDto, String>> = None;

    rsx!(
        Title { "Student | Satchel" }
        Page { class: "flex flex-col items-center", title: "Student details".to_string(),
            div { class: "w-full max-w-[960px] flex flex-col gap-4",
                Link { to: Route::Students {}, class: "btn btn-ghost w-fit", "« Students" }
                {match state {
                    None => rsx!(div { class: "skeleton h-64 w-full" }),
                    Some(Err(err)) => rsx!(p { class: "text-error", "{err}" }),
                    Some(Ok(student)) => rsx!(StudentCard { student }),
                }}
            }
        }
    )
}

#[component]
fn StudentCard(student: StudentDetailDto) -> Element {
    let details = student.student;

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body flex flex-col gap-4",
                div { class: "flex gap-6 items-center",
                    if let Some(photo_path) = details.photo_path.as_deref() {
                        div { class: "avatar",
                            div { class: "w-32 rounded",
                                img { src: photo_url(photo_path), alt: "{details.child_name}" }
                            }
                        }
                    }
                    div {
                        h2 { class: "card-title", "{details.child_name}" }
                        p { "Class {details.class}" }
                        p { "Born {details.date_of_birth}" }
                    }
                }
                div {
                    h3 { class: "font-semibold", "Address" }
                    p { "{details.address}" }
                    p { "{details.city}, {details.state} {details.zip_code}" }
                    p { "{details.country}" }
                }
                div {
                    h3 { class: "font-semibold", "Pickup persons" }
                    table { class: "table table-sm",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Relation" }
                                th { "Contact number" }
                            }
                        }
                        tbody {
                            for person in student.pickup_persons.iter() {
                                tr { key: "{person.id}",
                                    td { "{person.name}" }
                                    td { "{person.relation}" }
                                    td { "{person.contact_number}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
