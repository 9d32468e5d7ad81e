use dioxus::prelude::*;

/// Page body below the fixed navbar, with an optional heading above its children.
#[component]
pub fn Page(
    class: Option<&'static str>,
    title: Option<String>,
    children: Element,
) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen pt-[64px] p-4 {class}",
            if let Some(title) = title {
                h1 { class: "text-3xl font-semibold mb-6", "{title}" }
            }
            {children}
        }
    )
}
