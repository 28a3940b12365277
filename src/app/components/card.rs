use dioxus::prelude::*;

/// Content card used by the routed pages.
#[component]
pub fn Card(
    title: Option<String>,
    subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        section {
            class: "c-card",
            if let Some(title) = title {
                header {
                    class: "c-card__header",
                    h2 {
                        class: "c-card__title",
                        "{title}"
                    }
                    if let Some(subtitle) = subtitle {
                        p {
                            class: "c-card__subtitle",
                            "{subtitle}"
                        }
                    }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
