//! Navigation previews: the composite top nav and its sub-components.

use dioxus::prelude::*;
use tailframe_ui::{
    Logo, NavLink, NavLinks, NotificationButton, PageHeader, ProfileDropdown, TopNav,
};

use crate::components::{PreviewPage, PreviewSection};

#[component]
pub fn Navigation() -> Element {
    let custom_links = vec![
        NavLink::new("Overview", "#"),
        NavLink::new("Reports", "#").current(),
        NavLink::new("Billing", "#"),
    ];

    rsx! {
        PreviewPage { title: "Navigation",
            PreviewSection {
                title: "Top navigation (composite)",
                note: "Logo, links, notifications and profile dropdown, plus the page header.",
                div { class: "w-full overflow-hidden rounded-lg border border-gray-200",
                    TopNav { page_title: "Dashboard", page_subtitle: "Everything at a glance" }
                }
            }
            PreviewSection { title: "With custom links and user",
                div { class: "w-full overflow-hidden rounded-lg border border-gray-200",
                    TopNav {
                        links: custom_links,
                        user_name: "Ada Lovelace",
                        user_email: "ada@example.com",
                        page_title: "Reports",
                    }
                }
            }
            PreviewSection { title: "Sub-components",
                div { class: "flex w-full items-center gap-8 rounded-lg border border-gray-200 bg-white p-4",
                    Logo {}
                    NavLinks {}
                    NotificationButton {}
                    ProfileDropdown {}
                }
            }
            PreviewSection { title: "Page header alone",
                div { class: "w-full overflow-hidden rounded-lg border border-gray-200",
                    PageHeader { title: "Settings", subtitle: "Manage your workspace" }
                }
            }
        }
    }
}
