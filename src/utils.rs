use crate::config::PHONE_MIN_DIGITS;
use once_cell::sync::Lazy;
use regex::Regex;

// In-page anchors such as "#order" or "#models"
static ANCHOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#([A-Za-z][\w\-]*)$").unwrap());

/// Ease-in-out quadratic curve over `t` in [0, 1].
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Scroll offset `elapsed_ms` into a smooth scroll from `start` to `target`.
///
/// Returns the position and whether the animation has finished. A
/// non-positive duration jumps straight to `target`.
pub fn smooth_scroll_step(
    start: f64,
    target: f64,
    elapsed_ms: f64,
    duration_ms: f64,
) -> (f64, bool) {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return (target, true);
    }
    let progress = ease_in_out_quad(elapsed_ms / duration_ms);
    (start + (target - start) * progress, false)
}

/// How far the page has been scrolled, in percent (0-100).
///
/// A page that fits in the viewport reports 0.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Whether an element whose top edge sits at `top` (viewport coordinates)
/// has scrolled at least `offset` pixels into view.
pub fn is_in_view(top: f64, viewport_height: f64, offset: f64) -> bool {
    top < viewport_height - offset
}

/// Number of ASCII digits in `value`.
pub fn count_digits(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

/// True when a partially typed phone number is still too short.
pub fn phone_needs_hint(value: &str) -> bool {
    let digits = count_digits(value);
    digits > 0 && digits < PHONE_MIN_DIGITS
}

/// Element id an in-page link points at, e.g. `"#order"` -> `"order"`.
pub fn anchor_target(href: &str) -> Option<&str> {
    ANCHOR_REGEX
        .captures(href.trim())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-9);
        assert!(ease_in_out_quad(0.25) < 0.25);
        assert!(ease_in_out_quad(0.75) > 0.75);
        assert_eq!(ease_in_out_quad(-3.0), 0.0);
        assert_eq!(ease_in_out_quad(7.0), 1.0);
    }

    #[test]
    fn smooth_scroll_reaches_target() {
        assert_eq!(smooth_scroll_step(0.0, 800.0, 0.0, 600.0), (0.0, false));
        let (mid, done) = smooth_scroll_step(0.0, 800.0, 300.0, 600.0);
        assert!(!done);
        assert!((mid - 400.0).abs() < 1e-9);
        assert_eq!(smooth_scroll_step(0.0, 800.0, 650.0, 600.0), (800.0, true));
        assert_eq!(smooth_scroll_step(500.0, 100.0, 0.0, 0.0), (100.0, true));
    }

    #[test]
    fn scroll_upwards_interpolates_down() {
        let (pos, _) = smooth_scroll_step(1000.0, 0.0, 150.0, 600.0);
        assert!(pos < 1000.0 && pos > 500.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(100.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn in_view_threshold() {
        assert!(is_in_view(100.0, 800.0, 50.0));
        assert!(!is_in_view(750.0, 800.0, 50.0));
        assert!(!is_in_view(900.0, 800.0, 50.0));
    }

    #[test]
    fn phone_hint_counts_digits_only() {
        assert!(!phone_needs_hint(""));
        assert!(phone_needs_hint("+7 (999)"));
        assert!(!phone_needs_hint("+7 (999) 123-45-67"));
        assert_eq!(count_digits("+7 (999) 123-45-67"), 11);
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#order"), Some("order"));
        assert_eq!(anchor_target(" #model-x1 "), Some("model-x1"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#order"), None);
    }
}
