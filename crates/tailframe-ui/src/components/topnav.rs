//! Top Navigation Components
//!
//! Logo, link list, notification button, profile dropdown, page header
//! and mobile menu, plus the TopNav composite that wires them together.
//! These hold no styling logic beyond the binary current-link choice;
//! they mostly pass data through.

use dioxus::prelude::*;

use super::merge_class;

const DEFAULT_LOGO_SRC: &str =
    "https://tailwindcss.com/plus-assets/img/logos/mark.svg?color=indigo&shade=600";

const DEFAULT_AVATAR_SRC: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";

/// A single navigation entry.
#[derive(Clone, PartialEq, Debug)]
pub struct NavLink {
    pub name: String,
    pub href: String,
    pub current: bool,
}

impl NavLink {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            current: false,
        }
    }

    pub fn current(mut self) -> Self {
        self.current = true;
        self
    }
}

/// Default primary navigation links.
pub fn default_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Dashboard", "#").current(),
        NavLink::new("Team", "#"),
        NavLink::new("Projects", "#"),
        NavLink::new("Calendar", "#"),
    ]
}

/// Default profile menu entries.
pub fn default_profile_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Your profile", "#"),
        NavLink::new("Settings", "#"),
        NavLink::new("Sign out", "#"),
    ]
}

/// Desktop link styling: exactly two fixed class strings selected by the
/// link's `current` flag.
pub fn nav_link_classes(current: bool) -> &'static str {
    if current {
        "inline-flex items-center border-b-2 px-1 pt-1 text-sm font-medium \
         border-indigo-600 text-gray-900"
    } else {
        "inline-flex items-center border-b-2 px-1 pt-1 text-sm font-medium \
         border-transparent text-gray-500 hover:border-gray-300 hover:text-gray-700"
    }
}

/// Mobile menu link styling, same binary choice with block layout.
pub fn mobile_link_classes(current: bool) -> &'static str {
    if current {
        "block border-l-4 py-2 pr-4 pl-3 text-base font-medium \
         border-indigo-600 bg-indigo-50 text-indigo-700"
    } else {
        "block border-l-4 py-2 pr-4 pl-3 text-base font-medium \
         border-transparent text-gray-600 hover:border-gray-300 hover:bg-gray-50 hover:text-gray-800"
    }
}

/// Default notification button styling.
pub const NOTIFICATION_BUTTON_CLASSES: &str = "relative rounded-full p-1 text-gray-400 \
     hover:text-gray-500 focus:outline-2 focus:outline-offset-2 focus:outline-indigo-600";

/// Properties for the Logo component
#[derive(Props, Clone, PartialEq)]
pub struct LogoProps {
    /// Image source; falls back to the stock indigo mark
    #[props(default)]
    pub src: Option<String>,
    #[props(default = "Your Company".to_string())]
    pub alt: String,
    #[props(default = "h-8 w-auto".to_string())]
    pub class: String,
}

/// Company mark in the nav bar.
#[component]
pub fn Logo(props: LogoProps) -> Element {
    let src = props.src.clone().unwrap_or_else(|| DEFAULT_LOGO_SRC.to_string());

    rsx! {
        div { class: "flex shrink-0 items-center",
            img { class: "{props.class}", src: "{src}", alt: "{props.alt}" }
        }
    }
}

/// Properties for the NavLinks component
#[derive(Props, Clone, PartialEq)]
pub struct NavLinksProps {
    #[props(default = default_links())]
    pub links: Vec<NavLink>,
}

/// Horizontal desktop link list.
#[component]
pub fn NavLinks(props: NavLinksProps) -> Element {
    rsx! {
        div { class: "hidden sm:ml-6 sm:flex sm:space-x-8",
            for link in props.links.iter() {
                a {
                    href: "{link.href}",
                    class: nav_link_classes(link.current),
                    "aria-current": if link.current { "page" },
                    "{link.name}"
                }
            }
        }
    }
}

/// Properties for the NotificationButton component
#[derive(Props, Clone, PartialEq)]
pub struct NotificationButtonProps {
    #[props(default = NOTIFICATION_BUTTON_CLASSES.to_string())]
    pub class: String,
    #[props(default = "View notifications".to_string())]
    pub sr_text: String,
}

/// Bell button with screen-reader text.
#[component]
pub fn NotificationButton(props: NotificationButtonProps) -> Element {
    rsx! {
        button { r#type: "button", class: "{props.class}",
            span { class: "absolute -inset-1.5" }
            span { class: "sr-only", "{props.sr_text}" }
            svg {
                class: "h-6 w-6",
                fill: "none",
                view_box: "0 0 24 24",
                stroke_width: "1.5",
                stroke: "currentColor",
                "aria-hidden": "true",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    d: "M14.857 17.082a23.848 23.848 0 0 0 5.454-1.31A8.967 8.967 0 0 1 18 9.75V9A6 6 0 0 0 6 9v.75a8.967 8.967 0 0 1-2.312 6.022c1.733.64 3.56 1.085 5.455 1.31m5.714 0a24.255 24.255 0 0 1-5.714 0m5.714 0a3 3 0 1 1-5.714 0"
                }
            }
        }
    }
}

/// Properties for the ProfileDropdown component
#[derive(Props, Clone, PartialEq)]
pub struct ProfileDropdownProps {
    #[props(default = "Tom Cook".to_string())]
    pub user_name: String,
    #[props(default = "tom@example.com".to_string())]
    pub user_email: String,
    #[props(default)]
    pub avatar_src: Option<String>,
    #[props(default = default_profile_links())]
    pub menu_items: Vec<NavLink>,
}

/// Avatar button plus a hidden menu, toggled by the behavior layer.
#[component]
pub fn ProfileDropdown(props: ProfileDropdownProps) -> Element {
    let avatar = props
        .avatar_src
        .clone()
        .unwrap_or_else(|| DEFAULT_AVATAR_SRC.to_string());

    rsx! {
        div { class: "relative ml-3",
            button {
                r#type: "button",
                class: "relative flex rounded-full text-sm focus:outline-2 focus:outline-offset-2 focus:outline-indigo-600",
                "data-action": "click->dropdown#toggle",
                "aria-haspopup": "true",
                span { class: "absolute -inset-1.5" }
                span { class: "sr-only", "Open user menu" }
                img {
                    class: "h-8 w-8 rounded-full",
                    src: "{avatar}",
                    alt: "{props.user_name}",
                }
            }
            div {
                class: "absolute right-0 z-10 mt-2 w-48 origin-top-right rounded-md bg-white py-1 shadow-lg ring-1 ring-black/5 hidden",
                role: "menu",
                "data-dropdown-target": "menu",
                div { class: "px-4 py-2",
                    p { class: "text-sm font-medium text-gray-900", "{props.user_name}" }
                    p { class: "truncate text-sm text-gray-500", "{props.user_email}" }
                }
                for item in props.menu_items.iter() {
                    a {
                        href: "{item.href}",
                        class: "block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100",
                        role: "menuitem",
                        "{item.name}"
                    }
                }
            }
        }
    }
}

/// Properties for the PageHeader component
#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    #[props(default = "Dashboard".to_string())]
    pub title: String,
    #[props(default)]
    pub subtitle: Option<String>,
    #[props(default = "max-w-7xl".to_string())]
    pub max_width: String,
}

/// Page title block under the nav bar.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        header { class: "bg-white shadow-sm",
            div { class: "mx-auto {props.max_width} px-4 py-6 sm:px-6 lg:px-8",
                h1 { class: "text-3xl font-bold tracking-tight text-gray-900", "{props.title}" }
                if let Some(subtitle) = &props.subtitle {
                    p { class: "mt-1 text-sm text-gray-500", "{subtitle}" }
                }
            }
        }
    }
}

/// Properties for the MobileMenu component
#[derive(Props, Clone, PartialEq)]
pub struct MobileMenuProps {
    #[props(default = default_links())]
    pub links: Vec<NavLink>,
    #[props(default = "Tom Cook".to_string())]
    pub user_name: String,
    #[props(default = "tom@example.com".to_string())]
    pub user_email: String,
    #[props(default)]
    pub avatar_src: Option<String>,
    #[props(default = default_profile_links())]
    pub profile_links: Vec<NavLink>,
}

/// Collapsible mobile menu (hidden at the `sm:` breakpoint and up).
#[component]
pub fn MobileMenu(props: MobileMenuProps) -> Element {
    let avatar = props
        .avatar_src
        .clone()
        .unwrap_or_else(|| DEFAULT_AVATAR_SRC.to_string());

    rsx! {
        div { class: "sm:hidden hidden", "data-dropdown-target": "menu",
            div { class: "space-y-1 pt-2 pb-3",
                for link in props.links.iter() {
                    a {
                        href: "{link.href}",
                        class: mobile_link_classes(link.current),
                        "aria-current": if link.current { "page" },
                        "{link.name}"
                    }
                }
            }
            div { class: "border-t border-gray-200 pt-4 pb-3",
                div { class: "flex items-center px-4",
                    img { class: "h-10 w-10 rounded-full", src: "{avatar}", alt: "{props.user_name}" }
                    div { class: "ml-3",
                        div { class: "text-base font-medium text-gray-800", "{props.user_name}" }
                        div { class: "text-sm font-medium text-gray-500", "{props.user_email}" }
                    }
                }
                div { class: "mt-3 space-y-1",
                    for item in props.profile_links.iter() {
                        a {
                            href: "{item.href}",
                            class: "block px-4 py-2 text-base font-medium text-gray-500 hover:bg-gray-100 hover:text-gray-800",
                            "{item.name}"
                        }
                    }
                }
            }
        }
    }
}

/// Properties for the TopNav composite
#[derive(Props, Clone, PartialEq)]
pub struct TopNavProps {
    #[props(default)]
    pub logo_src: Option<String>,
    #[props(default = default_links())]
    pub links: Vec<NavLink>,
    #[props(default = "Tom Cook".to_string())]
    pub user_name: String,
    #[props(default = "tom@example.com".to_string())]
    pub user_email: String,
    #[props(default)]
    pub avatar_src: Option<String>,
    #[props(default = "Dashboard".to_string())]
    pub page_title: String,
    #[props(default)]
    pub page_subtitle: Option<String>,
    /// Optional additional CSS classes on the nav element
    #[props(default)]
    pub class: Option<String>,
}

/// Full top navigation: nav bar, mobile menu and page header. Aggregates
/// the sibling sub-components by passing options through only.
#[component]
pub fn TopNav(props: TopNavProps) -> Element {
    let nav_class = merge_class(props.class.as_deref(), "bg-white shadow-sm");

    rsx! {
        nav { class: "{nav_class}", "data-controller": "dropdown",
            div { class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8",
                div { class: "flex h-16 justify-between",
                    div { class: "flex",
                        Logo { src: props.logo_src.clone() }
                        NavLinks { links: props.links.clone() }
                    }
                    div { class: "hidden sm:ml-6 sm:flex sm:items-center",
                        NotificationButton {}
                        ProfileDropdown {
                            user_name: props.user_name.clone(),
                            user_email: props.user_email.clone(),
                            avatar_src: props.avatar_src.clone(),
                        }
                    }
                }
            }
            MobileMenu {
                links: props.links.clone(),
                user_name: props.user_name.clone(),
                user_email: props.user_email.clone(),
                avatar_src: props.avatar_src.clone(),
            }
        }
        PageHeader { title: props.page_title.clone(), subtitle: props.page_subtitle.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_link_gets_the_active_classes() {
        assert!(nav_link_classes(true).contains("border-indigo-600 text-gray-900"));
        assert!(nav_link_classes(false).contains("border-transparent text-gray-500"));
    }

    #[test]
    fn mobile_link_classes_are_block_level() {
        assert!(mobile_link_classes(true).starts_with("block border-l-4"));
        assert!(mobile_link_classes(true).contains("bg-indigo-50 text-indigo-700"));
        assert!(mobile_link_classes(false).contains("hover:bg-gray-50"));
    }

    #[test]
    fn default_links_mark_dashboard_current() {
        let links = default_links();
        assert_eq!(links.len(), 4);
        assert!(links[0].current);
        assert_eq!(links[0].name, "Dashboard");
        assert!(links[1..].iter().all(|l| !l.current));
    }

    #[test]
    fn nav_link_builder() {
        let link = NavLink::new("Team", "/team");
        assert!(!link.current);
        assert!(NavLink::new("Team", "/team").current().current);
    }
}
