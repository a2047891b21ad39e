//! Viewport scrolling. Requires a browser environment; a no-op on the
//! server.

/// Scroll the window back to the top. Called on every page change so a new
/// page never opens mid-scroll.
pub fn to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
