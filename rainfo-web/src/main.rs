//! Rainfo
//!
//! Single-page water conservation app: pick a US state, see its yearly
//! rainfall and the current drought map, log your own water usage and read
//! conservation tips.
//!
//! All state lives in one `Session` provided as the `AppState` context by
//! `App`; nothing is persisted past the page session.

use dioxus::prelude::*;
use rainfo_ui::components::BackButton;
use rainfo_ui::screens::ScreenView;
use rainfo_ui::state::AppState;
use rainfo_ui::style;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("starting Rainfo");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("rainfo-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let screen = state.screen();

    rsx! {
        div {
            style: format!(
                "color: {}; font-family: Poppins, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
                style::INK
            ),
            if screen.has_back_button() {
                BackButton {}
            }
            ScreenView { screen: screen }
        }
    }
}
