use crate::components::DropDown;
use crate::state::AppState;
use crate::style;
use dioxus::prelude::*;
use rainfo_core::TipCategory;
use rainfo_session::Screen;

/// Conservation tips, one drop-down per category.
#[component]
pub fn HowToHelpScreen() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            div { style: style::HEADING, {Screen::HowToHelp.heading()} }
            div {
                style: "padding: 2rem 1rem 0;",
                for category in TipCategory::ALL {
                    DropDown {
                        key: "{category}",
                        display: category.label().to_string(),
                        for tip in category.tips() {
                            div {
                                if let Some(link) = tip.usage_link {
                                    span {
                                        style: "text-decoration: underline; cursor: pointer;",
                                        onclick: move |_| state.navigate(Screen::UsageRecorder),
                                        {link}
                                    }
                                }
                                {tip.text}
                            }
                        }
                    }
                }
            }
        }
    }
}
