//! Embedded U.S. Drought Monitor map for one state.

use crate::js_bridge;
use dioxus::prelude::*;
use rainfo_core::drought_map_url;

/// DOM id of the clipping container around the iframe.
const MAP_CONTAINER_ID: &str = "drought-map-container";

/// Height of the map page header hidden by scrolling the container.
const HEADER_OFFSET_PX: u32 = 36;

/// Vertical space kept for the heading and location input.
const CHROME_PX: f64 = 150.0;

const FALLBACK_HEIGHT_PX: f64 = 600.0;

/// Iframe showing the drought map for `code`, a resolved two-letter code.
#[component]
pub fn DroughtMap(code: String) -> Element {
    let url = drought_map_url(&code);
    let height = js_bridge::viewport_height().unwrap_or(FALLBACK_HEIGHT_PX) - CHROME_PX;
    let frame_height = height + f64::from(HEADER_OFFSET_PX);

    use_effect(|| js_bridge::keep_scrolled(MAP_CONTAINER_ID, HEADER_OFFSET_PX));
    use_drop(js_bridge::stop_scrolling);

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            style: "position: relative; width: 100%; height: {height}px; overflow: hidden; margin-top: 1rem; background: white;",
            iframe {
                title: "drought map",
                src: "{url}",
                "scrolling": "no",
                style: "width: 100%; height: {frame_height}px; border: none; pointer-events: none;",
            }
        }
    }
}
