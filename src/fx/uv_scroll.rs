//! Scrolling-texture offsets.
//!
//! The engine component exposes scroll speeds as editor properties and
//! moves a material's UV offset every frame. Here the properties are a
//! plain config and the per-frame step is a pure function; applying the
//! offset to a material is the host's job.

use serde::{Deserialize, Serialize};

/// Editor-facing scroll settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UvScrollConfig {
    /// Horizontal speed, in texture widths per second.
    pub speed_u: f32,
    /// Vertical speed, in texture heights per second.
    pub speed_v: f32,
    pub enabled: bool,
}

impl Default for UvScrollConfig {
    fn default() -> Self {
        Self {
            speed_u: 0.0,
            speed_v: 0.0,
            enabled: true,
        }
    }
}

impl UvScrollConfig {
    #[must_use]
    pub fn new(speed_u: f32, speed_v: f32) -> Self {
        Self {
            speed_u,
            speed_v,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// UV offset, each component in `[0, 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UvOffset {
    pub u: f32,
    pub v: f32,
}

/// Accumulates scroll offset frame by frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UvScroller {
    pub config: UvScrollConfig,
    offset: UvOffset,
}

impl UvScroller {
    #[must_use]
    pub fn new(config: UvScrollConfig) -> Self {
        Self {
            config,
            offset: UvOffset::default(),
        }
    }

    #[must_use]
    pub fn offset(&self) -> UvOffset {
        self.offset
    }

    /// Advance by `dt` seconds and return the new offset.
    ///
    /// An axis whose step is not finite (NaN speed, or `speed * dt`
    /// overflowing) does not move.
    pub fn tick(&mut self, dt: f32) -> UvOffset {
        if self.config.enabled {
            self.offset.u = advance(self.offset.u, self.config.speed_u * dt);
            self.offset.v = advance(self.offset.v, self.config.speed_v * dt);
        }
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = UvOffset::default();
    }
}

fn advance(offset: f32, step: f32) -> f32 {
    if step.is_finite() {
        wrap(offset + step)
    } else {
        offset
    }
}

fn wrap(x: f32) -> f32 {
    if !x.is_finite() {
        return 0.0;
    }
    let w = x.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_tick_accumulates() {
        let mut scroller = UvScroller::new(UvScrollConfig::new(0.25, 0.5));

        let offset = scroller.tick(1.0);
        assert!(approx(offset.u, 0.25));
        assert!(approx(offset.v, 0.5));

        let offset = scroller.tick(1.0);
        assert!(approx(offset.u, 0.5));
        assert!(approx(offset.v, 0.0));
    }

    #[test]
    fn test_negative_speed_wraps() {
        let mut scroller = UvScroller::new(UvScrollConfig::new(-0.25, 0.0));

        let offset = scroller.tick(1.0);
        assert!(approx(offset.u, 0.75));
    }

    #[test]
    fn test_offsets_stay_in_unit_range() {
        let mut scroller = UvScroller::new(UvScrollConfig::new(3.7, -11.3));

        for _ in 0..1000 {
            let offset = scroller.tick(0.016);
            assert!((0.0..1.0).contains(&offset.u));
            assert!((0.0..1.0).contains(&offset.v));
        }
    }

    #[test]
    fn test_disabled_does_not_move() {
        let mut scroller = UvScroller::new(UvScrollConfig::new(1.0, 1.0).disabled());

        assert_eq!(scroller.tick(0.5), UvOffset::default());
    }

    #[test]
    fn test_overflowing_step_is_skipped() {
        let mut scroller = UvScroller::new(UvScrollConfig::new(f32::MAX, 0.25));

        let offset = scroller.tick(2.0);
        assert_eq!(offset.u, 0.0);
        assert!(approx(offset.v, 0.5));

        let offset = scroller.tick(2.0);
        assert!((0.0..1.0).contains(&offset.u));
    }

    #[test]
    fn test_nan_speed_does_not_poison_offset() {
        let mut scroller = UvScroller::new(UvScrollConfig::new(f32::NAN, 1.0));

        for _ in 0..10 {
            let offset = scroller.tick(0.1);
            assert_eq!(offset.u, 0.0);
            assert!((0.0..1.0).contains(&offset.v));
        }
    }

    #[test]
    fn test_non_finite_dt_is_ignored() {
        let mut scroller = UvScroller::new(UvScrollConfig::new(0.5, 0.5));
        scroller.tick(0.5);

        assert!(approx(scroller.tick(f32::INFINITY).u, 0.25));
        assert!(approx(scroller.tick(f32::NAN).v, 0.25));
    }

    #[test]
    fn test_wrap_maps_non_finite_to_zero() {
        assert_eq!(wrap(f32::NAN), 0.0);
        assert_eq!(wrap(f32::INFINITY), 0.0);
        assert_eq!(wrap(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut scroller = UvScroller::new(UvScrollConfig::new(0.1, 0.1));
        scroller.tick(2.0);
        scroller.reset();

        assert_eq!(scroller.offset(), UvOffset::default());
    }
}
