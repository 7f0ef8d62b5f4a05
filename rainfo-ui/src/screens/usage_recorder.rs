use crate::components::{UsageForm, UsageLog};
use crate::state::AppState;
use crate::style;
use dioxus::prelude::*;
use rainfo_session::Screen;

/// Running total, the add form and the log.
#[component]
pub fn UsageRecorderScreen() -> Element {
    let state = use_context::<AppState>();
    let total = state.total_gallons();

    rsx! {
        div {
            style: "text-align: center;",
            div { style: style::HEADING, {Screen::UsageRecorder.heading()} }
            div {
                style: "padding-top: 1.5rem;",
                div { "You've used" }
                div { style: style::BIG_NUMBER, "{total}" }
                div { "gallons of water since" }
                div { "you've started recording." }
            }
            UsageForm {}
            UsageLog {}
        }
    }
}
