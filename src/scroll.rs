//! Scroll-derived presentation math, kept free of DOM types so it can be
//! unit-tested on the host.

/// Offset (CSS pixels) past which the header switches to its elevated look.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of the total scroll range over which the hero fades out.
pub const HERO_FADE_RANGE: f64 = 0.2;

/// Scale the hero shrinks to once fully faded.
pub const HERO_MIN_SCALE: f64 = 0.9;

/// Header state for a given scroll offset. Level-triggered: callers may
/// re-apply the result on every scroll event.
pub fn is_elevated(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTransform {
    pub opacity: f64,
    pub scale: f64,
}

/// Hero opacity/scale for the current offset. Fades linearly from full to
/// invisible across the first [`HERO_FADE_RANGE`] of `max_scroll`, clamped at
/// both ends. A non-positive `max_scroll` (page shorter than the viewport)
/// yields the resting transform.
pub fn hero_transform(scroll_y: f64, max_scroll: f64) -> HeroTransform {
    let progress = if max_scroll > 0.0 {
        (scroll_y / (max_scroll * HERO_FADE_RANGE)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    HeroTransform {
        opacity: 1.0 - progress,
        scale: 1.0 - (1.0 - HERO_MIN_SCALE) * progress,
    }
}

/// Transition delay for the `index`-th item of a staggered list.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_stays_transparent_up_to_the_threshold() {
        assert!(!is_elevated(0.0));
        assert!(!is_elevated(49.9));
        assert!(!is_elevated(50.0));
    }

    #[test]
    fn header_elevates_past_the_threshold() {
        assert!(is_elevated(50.1));
        assert!(is_elevated(800.0));
    }

    #[test]
    fn threshold_oscillation_is_stable() {
        // Crossing back and forth must always reproduce the same state.
        for _ in 0..10 {
            assert!(is_elevated(51.0));
            assert!(!is_elevated(49.0));
        }
    }

    #[test]
    fn hero_at_rest_at_top_of_page() {
        let t = hero_transform(0.0, 2000.0);
        assert_eq!(t.opacity, 1.0);
        assert_eq!(t.scale, 1.0);
    }

    #[test]
    fn hero_fades_linearly_within_the_range() {
        // Fade range for max_scroll 2000 is 400px, so 200px is halfway.
        let t = hero_transform(200.0, 2000.0);
        assert!((t.opacity - 0.5).abs() < 1e-9);
        assert!((t.scale - 0.95).abs() < 1e-9);
    }

    #[test]
    fn hero_is_fully_faded_at_and_past_the_range_end() {
        let end = hero_transform(400.0, 2000.0);
        assert!((end.opacity).abs() < 1e-9);
        assert!((end.scale - HERO_MIN_SCALE).abs() < 1e-9);
        assert_eq!(hero_transform(1500.0, 2000.0), end);
    }

    #[test]
    fn hero_ignores_elastic_overscroll() {
        let t = hero_transform(-120.0, 2000.0);
        assert_eq!(t.opacity, 1.0);
        assert_eq!(t.scale, 1.0);
    }

    #[test]
    fn degenerate_scroll_range_keeps_the_hero_at_rest() {
        for max in [0.0, -300.0] {
            let t = hero_transform(500.0, max);
            assert_eq!(t.opacity, 1.0);
            assert_eq!(t.scale, 1.0);
        }
    }

    #[test]
    fn stagger_grows_by_a_fixed_step() {
        assert_eq!(stagger_delay_ms(0, 200), 0);
        assert_eq!(stagger_delay_ms(1, 200), 200);
        assert_eq!(stagger_delay_ms(5, 100), 500);
    }
}
