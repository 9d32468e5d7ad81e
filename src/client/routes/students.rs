use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaTrash};
use dioxus_free_icons::Icon;
#[cfg(feature = "web")]
use dioxus_logger::tracing;
use satchel::model::{
    sort::{SortColumn, StudentSort},
    student::{photo_url, StudentDto, StudentPageDto},
};

use crate::client::{components::Page, router::Route};

#[component]
pub fn Students() -> Element {
    let mut page = use_signal(|| 1u64);
    let mut search = use_signal(String::new);

    #[cfg(feature = "web")]
    let mut listing = use_resource(move || {
        let page = page();
        let search = search();
        async move { crate::client::util::api::get_students(page, search).await }
    });
    #[cfg(feature = "web")]
    let state = listing.read().clone();
    #[cfg(not(feature = "web"))]
    let state: Option<Result<StudentPageDto, String>> = None;

    let on_delete = move |id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            let confirmed = document::eval(
                "return confirm('Are you sure you want to delete this student?');",
            )
            .join::<bool>()
            .await
            .unwrap_or(false);
            if !confirmed {
                return;
            }

            match crate::client::util::api::delete_student(id).await {
                Ok(()) => listing.restart(),
                Err(err) => tracing::error!("Failed to delete student {}: {}", id, err),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = id;
    };

    rsx!(
        Title { "Students | Satchel" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1200px] flex flex-col gap-4",
                div { class: "flex justify-between items-center",
                    h1 { class: "text-2xl", "Students" }
                    input {
                        class: "input input-bordered w-64",
                        placeholder: "Search name or class",
                        value: "{search}",
                        oninput: move |e| {
                            search.set(e.value());
                            page.set(1);
                        },
                    }
                }
                {match state {
                    None => rsx!(div { class: "skeleton h-64 w-full" }),
                    Some(Err(err)) => rsx!(p { class: "text-error", "{err}" }),
                    Some(Ok(listing)) => rsx!(
                        StudentTable {
                            listing,
                            on_delete,
                            on_page: move |p| page.set(p),
                        }
                    ),
                }}
            }
        }
    )
}

#[component]
fn StudentTable(
    listing: StudentPageDto,
    on_delete: EventHandler<i32>,
    on_page: EventHandler<u64>,
) -> Element {
    let summary = match (listing.from, listing.to) {
        (Some(from), Some(to)) => format!("Showing {} to {} of {} students", from, to, listing.total),
        _ => "No students found".to_string(),
    };
    let prev_page = listing.prev_page;
    let next_page = listing.next_page;

    let sort = use_signal(|| None::<StudentSort>);
    let mut rows = listing.data.clone();
    if let Some(order) = sort() {
        order.apply(&mut rows);
    }

    rsx!(
        div { class: "overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Photo" }
                        SortHeader { label: "Name", column: SortColumn::Name, sort }
                        SortHeader { label: "Date of birth", column: SortColumn::DateOfBirth, sort }
                        SortHeader { label: "Class", column: SortColumn::Class, sort }
                        SortHeader { label: "City", column: SortColumn::City, sort }
                        th { "" }
                    }
                }
                tbody {
                    for student in rows.into_iter() {
                        StudentRow { key: "{student.id}", student, on_delete }
                    }
                }
            }
        }
        div { class: "flex justify-between items-center",
            p { class: "text-sm", "{summary}" }
            div { class: "join",
                button {
                    class: "join-item btn",
                    disabled: prev_page.is_none(),
                    onclick: move |_| {
                        if let Some(prev) = prev_page {
                            on_page.call(prev);
                        }
                    },
                    "«"
                }
                button { class: "join-item btn",
                    "Page {listing.current_page} of {listing.last_page}"
                }
                button {
                    class: "join-item btn",
                    disabled: next_page.is_none(),
                    onclick: move |_| {
                        if let Some(next) = next_page {
                            on_page.call(next);
                        }
                    },
                    "»"
                }
            }
        }
    )
}

#[component]
fn SortHeader(
    label: &'static str,
    column: SortColumn,
    mut sort: Signal<Option<StudentSort>>,
) -> Element {
    let indicator = StudentSort::indicator(sort(), column);

    rsx!(
        th {
            class: "cursor-pointer select-none",
            onclick: move |_| sort.set(Some(StudentSort::toggle(sort(), column))),
            "{label}{indicator}"
        }
    )
}

#[component]
fn StudentRow(student: StudentDto, on_delete: EventHandler<i32>) -> Element {
    let id = student.id;

    rsx!(
        tr {
            td {
                div { class: "avatar",
                    div { class: "w-12 h-12 rounded",
                        if let Some(photo_path) = student.photo_path.as_deref() {
                            img { src: photo_url(photo_path), alt: "{student.child_name}" }
                        }
                    }
                }
            }
            td { "{student.child_name}" }
            td { "{student.date_of_birth}" }
            td { "{student.class}" }
            td { "{student.city}" }
            td {
                div { class: "flex gap-2",
                    Link { to: Route::ViewStudent { id }, class: "btn btn-sm btn-outline",
                        Icon { width: 14, height: 14, icon: FaEye }
                    }
                    button {
                        class: "btn btn-sm btn-error btn-outline",
                        onclick: move |_| on_delete.call(id),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
            }
        }
    )
}
