use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::traits::Scalar;
use crate::vector::Vec3;

/// 8-bit RGB color, the representation handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Warm accent, used by a HUD for titles and headings.
    pub const AMBER: Rgb = Rgb::new(255, 196, 0);
    /// Cool secondary accent.
    pub const CYAN: Rgb = Rgb::new(0, 196, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts an HSB (hue/saturation/brightness) triple to RGB.
    ///
    /// `h` wraps into [0, 1); `s` and `b` are expected in [0, 1].
    pub fn from_hsb(h: f64, s: f64, b: f64) -> Self {
        let h = (h % 1.0 + 1.0) % 1.0;
        let i = (h * 6.0).floor();
        let f = h * 6.0 - i;
        let p = b * (1.0 - s);
        let q = b * (1.0 - f * s);
        let t = b * (1.0 - (1.0 - f) * s);
        let (r, g, b) = match i as i32 {
            0 => (b, t, p),
            1 => (q, b, p),
            2 => (p, b, t),
            3 => (p, q, b),
            4 => (t, p, b),
            _ => (b, p, q),
        };
        Self::new(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }
}

/// Per-point color rule of a draw configuration.
///
/// A closed set of pure functions: the same `(index, count)` always yields
/// the same color, whatever the point's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum ColorScheme {
    /// Hue walks the full wheel along the trajectory: hue = index / count
    /// at full saturation and brightness, so the oldest point is red and
    /// the wheel wraps just before the newest.
    HueCycle,
}

impl ColorScheme {
    /// Color for the `index`-th of `count` points currently drawn.
    ///
    /// The point is passed so that position-dependent schemes remain
    /// expressible; `HueCycle` ignores it.
    pub fn color_for_point<T: Scalar>(&self, _point: Vec3<T>, index: usize, count: usize) -> Rgb {
        match self {
            ColorScheme::HueCycle => {
                let hue = if count == 0 {
                    0.0
                } else {
                    index as f64 / count as f64
                };
                Rgb::from_hsb(hue, 1.0, 1.0)
            }
        }
    }
}

/// Rendering-relevant parameters owned by an attractor model.
///
/// Pure configuration: the engine reads `step_per_ms` and `max_points`,
/// everything else is advisory data for the rendering layer. One instance
/// is constructed per model and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Abstract integrator time units per wall-clock millisecond. Fixed per
    /// model and independent of frame rate.
    pub step_per_ms: f64,
    /// Upper bound on the trajectory history length.
    pub max_points: usize,
    /// Uniform scale applied when painting the trajectory.
    pub draw_scale: f64,
    pub stroke_weight: f64,
    pub background: Rgb,
    pub foreground: Rgb,
    pub accent: Rgb,
    pub accent2: Rgb,
    /// Shape fill; `None` paints strokes only.
    pub fill: Option<Rgb>,
    pub scheme: ColorScheme,
}

impl DrawConfig {
    pub const DEFAULT_STEP_PER_MS: f64 = 0.0004;
    pub const DEFAULT_MAX_POINTS: usize = 50_000;
    pub const DEFAULT_DRAW_SCALE: f64 = 5.0;
    pub const DEFAULT_STROKE_WEIGHT: f64 = 0.5;

    /// The standard configuration shared by the built-in models: hue-cycled
    /// strokes on a black background.
    pub fn hue_cycle() -> Self {
        Self {
            step_per_ms: Self::DEFAULT_STEP_PER_MS,
            max_points: Self::DEFAULT_MAX_POINTS,
            draw_scale: Self::DEFAULT_DRAW_SCALE,
            stroke_weight: Self::DEFAULT_STROKE_WEIGHT,
            background: Rgb::BLACK,
            foreground: Rgb::WHITE,
            accent: Rgb::AMBER,
            accent2: Rgb::CYAN,
            fill: None,
            scheme: ColorScheme::HueCycle,
        }
    }

    /// A custom configuration with the standard visuals but caller-chosen
    /// integration rate and history bound. Rejects invalid values instead
    /// of letting them corrupt the trajectory buffer later.
    pub fn new(step_per_ms: f64, max_points: usize) -> Result<Self> {
        let config = Self {
            step_per_ms,
            max_points,
            ..Self::hue_cycle()
        };
        config.validate()?;
        Ok(config)
    }

    /// Color for the `index`-th of `count` points, per this configuration's
    /// scheme.
    pub fn color_for_point<T: Scalar>(&self, point: Vec3<T>, index: usize, count: usize) -> Rgb {
        self.scheme.color_for_point(point, index, count)
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<()> {
        if !self.step_per_ms.is_finite() || self.step_per_ms <= 0.0 {
            bail!("step_per_ms must be finite and positive.");
        }
        if self.max_points == 0 {
            bail!("max_points must be at least 1.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_err_contains<T: std::fmt::Debug>(result: Result<T>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    #[test]
    fn from_hsb_hits_the_primaries() {
        assert_eq!(Rgb::from_hsb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsb(1.0 / 3.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hsb(2.0 / 3.0, 1.0, 1.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn from_hsb_wraps_hue() {
        assert_eq!(Rgb::from_hsb(1.0, 1.0, 1.0), Rgb::from_hsb(0.0, 1.0, 1.0));
        assert_eq!(Rgb::from_hsb(-0.25, 1.0, 1.0), Rgb::from_hsb(0.75, 1.0, 1.0));
    }

    #[test]
    fn from_hsb_desaturated_is_gray() {
        assert_eq!(Rgb::from_hsb(0.37, 0.0, 1.0), Rgb::WHITE);
        assert_eq!(Rgb::from_hsb(0.37, 0.0, 0.0), Rgb::BLACK);
    }

    #[test]
    fn hue_cycle_depends_only_on_index_and_count() {
        let scheme = ColorScheme::HueCycle;
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-9.0, 0.0, 4.5);
        for index in [0usize, 17, 499] {
            assert_eq!(
                scheme.color_for_point(a, index, 500),
                scheme.color_for_point(b, index, 500)
            );
        }
    }

    #[test]
    fn hue_cycle_starts_red_and_stays_in_range() {
        let scheme = ColorScheme::HueCycle;
        let p = Vec3::<f64>::zero();
        assert_eq!(scheme.color_for_point(p, 0, 100), Rgb::new(255, 0, 0));
        // index == count would wrap back to red; the last drawn index is
        // count - 1, one step short of the full wheel.
        assert_ne!(scheme.color_for_point(p, 99, 100), Rgb::new(255, 0, 0));
    }

    #[test]
    fn hue_cycle_tolerates_empty_count() {
        let scheme = ColorScheme::HueCycle;
        assert_eq!(
            scheme.color_for_point(Vec3::<f64>::zero(), 0, 0),
            Rgb::new(255, 0, 0)
        );
    }

    #[test]
    fn config_rejects_non_positive_step() {
        assert_err_contains(DrawConfig::new(0.0, 100), "step_per_ms");
        assert_err_contains(DrawConfig::new(-0.1, 100), "step_per_ms");
        assert_err_contains(DrawConfig::new(f64::NAN, 100), "step_per_ms");
    }

    #[test]
    fn config_rejects_zero_capacity() {
        assert_err_contains(DrawConfig::new(0.0004, 0), "max_points");
    }

    #[test]
    fn standard_config_is_valid() {
        let config = DrawConfig::hue_cycle();
        config.validate().expect("standard config should validate");
        assert_eq!(config.step_per_ms, 0.0004);
        assert_eq!(config.max_points, 50_000);
        assert_eq!(
            config.color_for_point(Vec3::<f64>::zero(), 0, 100),
            Rgb::new(255, 0, 0)
        );
    }
}
