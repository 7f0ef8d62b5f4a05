use crate::components::{DroughtMap, LocationInput};
use crate::state::AppState;
use crate::style;
use dioxus::prelude::*;
use rainfo_core::{resolve_code, INVALID_STATE};
use rainfo_session::Screen;

/// Drought map for the current location; just the input until it resolves.
#[component]
pub fn DroughtMonitorScreen() -> Element {
    let state = use_context::<AppState>();
    let location = state.location();
    let code = resolve_code(&location);

    rsx! {
        div {
            style: "text-align: center;",
            div { style: style::HEADING, {Screen::DroughtMonitor.heading()} }
            LocationInput { prompt: "Which state do you want to see?".to_string() }
            if code != INVALID_STATE {
                DroughtMap { code: code.to_string() }
            }
        }
    }
}
