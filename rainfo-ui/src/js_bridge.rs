//! Thin wrappers around JS interop via `js_sys::eval()`.
//!
//! The drought map page is cross-origin, so its own scroll position can't be
//! touched. Instead the iframe sits in a clipping container that a repeating
//! timer keeps scrolled past the page header.

/// How often the map container is re-scrolled.
pub const MAP_SCROLL_INTERVAL_MS: u32 = 250;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Rainfo JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("JS eval failed: {:?}", e);
    }
}

/// Start (or restart) the timer that pins `container_id` at `offset_px`.
pub fn keep_scrolled(container_id: &str, offset_px: u32) {
    call_js(&format!(
        r#"
        if (window.__rainfoMapScroll) clearInterval(window.__rainfoMapScroll);
        window.__rainfoMapScroll = setInterval(function() {{
            var el = document.getElementById('{container_id}');
            if (el && el.scrollTop !== {offset_px}) {{
                el.scrollTop = {offset_px};
            }}
        }}, {interval});
        "#,
        interval = MAP_SCROLL_INTERVAL_MS,
    ));
}

/// Stop the timer started by [`keep_scrolled`].
pub fn stop_scrolling() {
    call_js(
        "if (window.__rainfoMapScroll) { clearInterval(window.__rainfoMapScroll); delete window.__rainfoMapScroll; }",
    );
}

/// Height of the browser viewport in CSS pixels.
pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}
