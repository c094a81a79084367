use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod config;
mod demo_values;
mod gallery;

use demo_values::DemoValues;
use gallery::Gallery;

const SHOWCASE_CSS: Asset = asset!("/assets/showcase.css");

fn main() {
    let config = config::load_showcase_config();

    let level = config.level().parse::<Level>().unwrap_or(Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("[logger] Failed to install logger: {e}");
    }
    tracing::info!(
        title = %config.title,
        force_rtl = config.force_rtl,
        log_changes = config.log_changes,
        "showcase config loaded"
    );

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(DemoValues::new);
    let config = config::showcase_config();

    rsx! {
        document::Link { rel: "stylesheet", href: SHOWCASE_CSS }
        Gallery { config }
    }
}
