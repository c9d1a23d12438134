use gloo_timers::future::TimeoutFuture;
use log::warn;
use wasm_bindgen_futures::spawn_local;

/// Height of the fixed navigation bar, kept clear above a scrolled-to section.
pub const NAV_OFFSET: f64 = 110.0;
const SCROLL_ATTEMPTS: u32 = 10;
const SCROLL_RETRY_MS: u32 = 40;

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Section id from a location hash such as `#jurnal`.
pub fn section_from_hash(hash: &str) -> Option<&str> {
    let id = hash.trim_start_matches('#').trim();
    (!id.is_empty()).then_some(id)
}

fn try_scroll(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = element.get_bounding_client_rect().top() + scroll_y - NAV_OFFSET;
    window.scroll_to_with_x_and_y(0.0, top.max(0.0));
    true
}

/// Scrolls to a section, retrying briefly while the page is still mounting it.
pub fn scroll_to_section(id: &str) {
    let id = id.to_string();
    spawn_local(async move {
        for _ in 0..SCROLL_ATTEMPTS {
            if try_scroll(&id) {
                return;
            }
            TimeoutFuture::new(SCROLL_RETRY_MS).await;
        }
        warn!("Section #{} never appeared, not scrolling", id);
    });
}

/// Follows the hash of the current location, if any.
pub fn scroll_to_location_hash() {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    if let Some(id) = section_from_hash(&hash) {
        scroll_to_section(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_to_section_id() {
        assert_eq!(section_from_hash("#jurnal"), Some("jurnal"));
        assert_eq!(section_from_hash("membrie"), Some("membrie"));
        assert_eq!(section_from_hash("#"), None);
        assert_eq!(section_from_hash(""), None);
    }
}
