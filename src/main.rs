#![allow(non_snake_case)]

mod app;
mod components;
mod pages;

use std::sync::Mutex;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Page requested on the command line, consumed once at startup.
static INITIAL_PAGE: Mutex<Option<String>> = Mutex::new(None);

fn set_initial_page(page: Option<String>) {
    if let Ok(mut slot) = INITIAL_PAGE.lock() {
        *slot = page;
    }
}

/// Take the startup page (set via --page). Returns `None` on every
/// call after the first so revisiting the overview never re-redirects.
pub fn take_initial_page() -> Option<String> {
    INITIAL_PAGE.lock().ok().and_then(|mut slot| slot.take())
}

/// Tailframe Lookbook - visual preview gallery for the component kit
#[derive(Parser, Debug)]
#[command(name = "tailframe-lookbook")]
#[command(about = "Visual preview gallery for the Tailframe component kit")]
struct Args {
    /// Preview page to open at startup (e.g. "badges", "tooltips")
    #[arg(long)]
    page: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

/// The components emit Tailwind utility classes, so the preview shell
/// pulls Tailwind from the CDN.
const CUSTOM_HEAD: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(ref page) = args.page {
        tracing::info!("Opening on page '{}'", page);
    }
    set_initial_page(args.page);

    tracing::info!("Starting Tailframe lookbook ({}x{})", args.width, args.height);

    let config = Config::new()
        .with_custom_head(CUSTOM_HEAD.to_string())
        .with_window(
            WindowBuilder::new()
                .with_title("Tailframe Lookbook")
                .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_page_is_taken_once() {
        set_initial_page(Some("badges".to_string()));
        assert_eq!(take_initial_page().as_deref(), Some("badges"));
        assert_eq!(take_initial_page(), None);
    }
}
