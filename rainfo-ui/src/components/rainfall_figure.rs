//! "{State} had / N / inches of rainfall this year."

use crate::style;
use dioxus::prelude::*;
use rainfo_core::{capitalize, lookup_rainfall};

/// Rainfall for a resolved state name. Renders nothing if the name has no
/// rainfall entry.
#[component]
pub fn RainfallFigure(name: String) -> Element {
    let Some(inches) = lookup_rainfall(&name) else {
        return rsx! {};
    };
    let display_name = capitalize(&name);

    rsx! {
        div {
            style: "margin: 6rem auto 0; width: 200px;",
            div { "{display_name} had" }
            div {
                style: style::BIG_NUMBER,
                "{inches}"
            }
            div { "inches of rainfall this year." }
        }
    }
}
