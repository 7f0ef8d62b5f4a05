use crate::components::{LocationInput, RainfallFigure};
use crate::state::AppState;
use crate::style;
use dioxus::prelude::*;
use rainfo_core::{resolve_name, INVALID_STATE};
use rainfo_session::Screen;

#[component]
pub fn RainfallLevelsScreen() -> Element {
    let state = use_context::<AppState>();
    let location = state.location();
    let name = resolve_name(&location);

    rsx! {
        div {
            style: "text-align: center;",
            div { style: style::HEADING, {Screen::RainfallLevels.heading()} }
            LocationInput { prompt: "Which state do you want to see?".to_string() }
            if name != INVALID_STATE {
                RainfallFigure { name: name.to_string() }
            }
        }
    }
}
