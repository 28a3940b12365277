use dioxus::prelude::*;

use crate::app::layouts::{MobileSidebar, SidebarContent, Topbar};
use crate::app::pages::Route;
use crate::shared::hooks::use_panel;

/// Layout wrapping every route: sidebars, top bar and the routed content.
///
/// ```text
/// +-----------+----------------------------------+
/// |  Sidebar  |  Topbar (search, bell, profile)   |
/// |  (lg+)    |----------------------------------|
/// |           |  Outlet::<Route>                  |
/// +-----------+----------------------------------+
/// ```
///
/// The mobile panel's visibility lives here and nowhere else.
#[component]
pub fn Shell() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let sidebar = use_panel("mobile_sidebar");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-shell",
            MobileSidebar { panel: sidebar }

            // Static sidebar for desktop
            div { class: "c-shell__sidebar",
                SidebarContent {}
            }

            div { class: "c-shell__body",
                Topbar { sidebar }

                main { class: "c-shell__main",
                    div { class: "c-shell__content",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}
