use crate::components::{LocationInput, NavButton};
use crate::style;
use dioxus::prelude::*;
use rainfo_session::Screen;

/// Order of the buttons on the title screen.
const DESTINATIONS: [Screen; 4] = [
    Screen::RainfallLevels,
    Screen::DroughtMonitor,
    Screen::UsageRecorder,
    Screen::HowToHelp,
];

#[component]
pub fn TitleScreen() -> Element {
    rsx! {
        div {
            style: "text-align: center;",
            div { style: style::HEADING, {Screen::Title.heading()} }
            LocationInput { prompt: "Which state are you in?".to_string() }
            div {
                style: "margin: 4rem auto 0; width: 200px;",
                for target in DESTINATIONS {
                    NavButton { key: "{target}", target: target }
                }
            }
        }
    }
}
