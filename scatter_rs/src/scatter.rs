//! Decorative placement generator.
//!
//! Scatters kernels over the left and right halves of the hero and pushes
//! any that land inside the [`SafeZone`] vertically out of it.
//!
//! Each kernel consumes draws in a fixed order: `x`, `y`, `size`, `rot`,
//! then one offset draw only if it has to be repelled. Changing that order
//! changes every seeded layout.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScatterError;
use crate::kernel::{Half, Kernel, Layer};
use crate::random::RandomSource;
use crate::zone::{MIDLINE, PLANE_MAX, PLANE_MIN, SafeZone};

/// Numeric range a value is drawn from: `min` inclusive, `max` exclusive
/// (a degenerate `min == max` span always yields `min`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        self.min + rng.unit() * (self.max - self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value < self.max
    }

    fn check(&self, field: &'static str, lo: f64, hi: f64) -> Result<(), ScatterError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ScatterError::InvalidSpan {
                field,
                min: self.min,
                max: self.max,
            });
        }
        if self.min < lo || self.max > hi {
            return Err(ScatterError::SpanOutOfBounds {
                field,
                min: self.min,
                max: self.max,
                lo,
                hi,
            });
        }
        Ok(())
    }
}

/// Placement settings. Defaults reproduce the MakhanaCo hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    pub count_left: usize,
    pub count_right: usize,
    pub left_x: Span,
    pub right_x: Span,
    pub y: Span,
    /// Kernel diameter in pixels.
    pub size: Span,
    /// Rotation in degrees.
    pub rot: Span,
    /// Distance a repelled kernel is pushed past the zone edge.
    pub repel_offset: Span,
    pub safe_zone: SafeZone,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count_left: 12,
            count_right: 12,
            left_x: Span::new(2.0, 48.0),
            right_x: Span::new(52.0, 98.0),
            y: Span::new(6.0, 94.0),
            size: Span::new(20.0, 40.0),
            rot: Span::new(0.0, 360.0),
            repel_offset: Span::new(6.0, 12.0),
            safe_zone: SafeZone::HERO,
        }
    }
}

impl ScatterConfig {
    pub fn validate(&self) -> Result<(), ScatterError> {
        self.left_x.check("left_x", PLANE_MIN, MIDLINE)?;
        self.right_x.check("right_x", MIDLINE, PLANE_MAX)?;
        self.y.check("y", PLANE_MIN, PLANE_MAX)?;
        self.size.check("size", f64::MIN_POSITIVE, f64::MAX)?;
        self.rot.check("rot", 0.0, 360.0)?;
        self.repel_offset.check("repel_offset", 0.0, PLANE_MAX)?;
        self.safe_zone.validate()
    }

    pub fn total(&self) -> usize {
        self.count_left + self.count_right
    }
}

/// A validated generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    config: ScatterConfig,
}

impl Scatter {
    pub fn new(config: ScatterConfig) -> Result<Self, ScatterError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    /// All left-half kernels in draw order, then all right-half kernels.
    ///
    /// Kernels may overlap each other; only the safe zone is avoided.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<Kernel> {
        self.generate_with_stats(rng).0
    }

    /// Same layout as [`Scatter::generate`] for the same source, plus a
    /// summary that includes how many kernels the safe zone pushed away.
    pub fn generate_with_stats<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (Vec<Kernel>, LayoutStats) {
        let cfg = &self.config;
        let mut kernels = Vec::with_capacity(cfg.total());
        let mut repelled = 0;
        let halves = [(Half::Left, cfg.count_left), (Half::Right, cfg.count_right)];
        for (half, count) in halves {
            for index in 0..count {
                let (kernel, moved) = self.place(half, index, rng);
                if moved {
                    repelled += 1;
                }
                kernels.push(kernel);
            }
        }
        debug!(
            left = cfg.count_left,
            right = cfg.count_right,
            repelled,
            "generated hero kernels"
        );

        let mut stats = LayoutStats::of(&kernels, &cfg.safe_zone);
        stats.repelled = repelled;
        (kernels, stats)
    }

    /// Draws the `index`-th kernel of `half` and applies repulsion.
    pub fn place_one<R: RandomSource + ?Sized>(
        &self,
        half: Half,
        index: usize,
        rng: &mut R,
    ) -> Kernel {
        self.place(half, index, rng).0
    }

    fn place<R: RandomSource + ?Sized>(
        &self,
        half: Half,
        index: usize,
        rng: &mut R,
    ) -> (Kernel, bool) {
        let cfg = &self.config;
        let x_span = match half {
            Half::Left => cfg.left_x,
            Half::Right => cfg.right_x,
        };
        let mut kernel = Kernel {
            x: x_span.sample(rng),
            y: cfg.y.sample(rng),
            size: cfg.size.sample(rng),
            rot: cfg.rot.sample(rng),
            layer: Layer::for_index(index),
        };
        let moved = repel(&mut kernel, &cfg.safe_zone, cfg.repel_offset, rng);
        if moved {
            debug!(?half, index, x = kernel.x, y = kernel.y, "kernel repelled");
            // Only y moves, and without regard to kernel size.
            if !kernel.is_on_plane() {
                debug!(?half, index, y = kernel.y, "repelled kernel left the plane");
            }
        }
        (kernel, moved)
    }
}

/// Applies the safe-zone repulsion rule. Returns whether the kernel moved.
///
/// A kernel strictly inside `zone` is moved above it when it sits in the
/// upper half of the plane, below it otherwise. `x` never changes.
pub fn repel<R: RandomSource + ?Sized>(
    kernel: &mut Kernel,
    zone: &SafeZone,
    offset: Span,
    rng: &mut R,
) -> bool {
    if !zone.contains(kernel.x, kernel.y) {
        return false;
    }
    kernel.y = if kernel.y < MIDLINE {
        zone.y_min() - offset.sample(rng)
    } else {
        zone.y_max() + offset.sample(rng)
    };
    true
}

/// Places `count_left + count_right` kernels with the default ranges.
///
/// `safe_zone` is used as given; run [`SafeZone::validate`] first when it
/// comes from outside.
pub fn generate<R: RandomSource + ?Sized>(
    count_left: usize,
    count_right: usize,
    safe_zone: SafeZone,
    rng: &mut R,
) -> Vec<Kernel> {
    let scatter = Scatter {
        config: ScatterConfig {
            count_left,
            count_right,
            safe_zone,
            ..ScatterConfig::default()
        },
    };
    scatter.generate(rng)
}

/// Summary of a generated layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    pub total: usize,
    pub left: usize,
    pub right: usize,
    pub background: usize,
    pub midground: usize,
    pub foreground: usize,
    /// Kernels moved out of the safe zone. Only known at generation time,
    /// so [`LayoutStats::of`] leaves it at zero.
    pub repelled: usize,
    /// Kernels pushed past the top or bottom edge.
    pub off_plane: usize,
    /// Kernels inside the safe zone; zero for any generated layout.
    pub inside_zone: usize,
}

impl LayoutStats {
    pub fn of(kernels: &[Kernel], zone: &SafeZone) -> Self {
        let mut stats = LayoutStats {
            total: kernels.len(),
            ..Default::default()
        };
        for k in kernels {
            match k.half() {
                Half::Left => stats.left += 1,
                Half::Right => stats.right += 1,
            }
            match k.layer {
                Layer::Background => stats.background += 1,
                Layer::Midground => stats.midground += 1,
                Layer::Foreground => stats.foreground += 1,
            }
            if !k.is_on_plane() {
                stats.off_plane += 1;
            }
            if zone.contains(k.x, k.y) {
                stats.inside_zone += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedSequence, seeded};
    use pretty_assertions::assert_eq;

    fn hero() -> Scatter {
        Scatter::new(ScatterConfig::default()).expect("default config is valid")
    }

    #[test]
    fn generates_requested_count() {
        let kernels = hero().generate(&mut seeded(1));
        assert_eq!(kernels.len(), 24);

        let lopsided = generate(3, 0, SafeZone::HERO, &mut seeded(1));
        assert_eq!(lopsided.len(), 3);
        assert!(generate(0, 0, SafeZone::HERO, &mut seeded(1)).is_empty());
    }

    #[test]
    fn ranges_hold_across_many_seeds() {
        let scatter = hero();
        for seed in 0..200 {
            let kernels = scatter.generate(&mut seeded(seed));
            for (i, k) in kernels.iter().enumerate() {
                assert!((0.0..360.0).contains(&k.rot), "rot {} seed {seed}", k.rot);
                assert!((20.0..=40.0).contains(&k.size), "size {} seed {seed}", k.size);
                if i < 12 {
                    assert!((2.0..=48.0).contains(&k.x), "left x {} seed {seed}", k.x);
                } else {
                    assert!((52.0..=98.0).contains(&k.x), "right x {} seed {seed}", k.x);
                }
                assert!(
                    !SafeZone::HERO.contains(k.x, k.y),
                    "kernel {i} inside safe zone for seed {seed}: {k:?}"
                );
            }
        }
    }

    #[test]
    fn layers_cycle_independently_per_half() {
        let kernels = hero().generate(&mut seeded(3));
        for (i, k) in kernels.iter().enumerate() {
            assert_eq!(k.layer, Layer::for_index(i % 12), "kernel {i}");
        }
        assert_eq!(kernels[0].layer, Layer::Foreground);
        assert_eq!(kernels[12].layer, Layer::Foreground);
        assert_eq!(kernels[13].layer, Layer::Background);
        assert_eq!(kernels[14].layer, Layer::Midground);
    }

    #[test]
    fn identical_sources_give_identical_layouts() {
        let scatter = hero();
        let draws: Vec<f64> = (0..37).map(|i| (i as f64 * 0.137) % 1.0).collect();
        let a = scatter.generate(&mut FixedSequence::new(draws.clone()).expect("seq"));
        let b = scatter.generate(&mut FixedSequence::new(draws).expect("seq"));
        assert_eq!(a, b);

        assert_eq!(
            scatter.generate(&mut seeded(99)),
            scatter.generate(&mut seeded(99))
        );
    }

    #[test]
    fn candidate_in_upper_zone_is_pushed_above() {
        // x = 2 + 0.5 * 46 = 25, y = 6 + 0.3864 * 88 ~= 40, offset = 6 + 0.5 * 6 = 9
        let mut seq = FixedSequence::new(vec![0.5, 0.3864, 0.0, 0.0, 0.5]).expect("seq");
        let kernel = hero().place_one(Half::Left, 0, &mut seq);
        assert_eq!(seq.consumed(), 5);
        assert_eq!(kernel.x, 25.0);
        assert!((kernel.y - 3.0).abs() < 1e-9, "y = {}", kernel.y);
    }

    #[test]
    fn repel_matches_worked_example() {
        let zone = SafeZone::new(22.0, 78.0, 12.0, 72.0).expect("zone");
        for unit in [0.0, 0.25, 0.5, 0.999] {
            let mut kernel = Kernel {
                x: 50.0,
                y: 40.0,
                size: 30.0,
                rot: 0.0,
                layer: Layer::Background,
            };
            let mut seq = FixedSequence::new(vec![unit]).expect("seq");
            assert!(repel(&mut kernel, &zone, Span::new(6.0, 12.0), &mut seq));
            assert_eq!(kernel.x, 50.0);
            assert!(kernel.y > 0.0 && kernel.y <= 6.0, "y = {}", kernel.y);
        }
    }

    #[test]
    fn candidate_in_lower_zone_is_pushed_below() {
        let mut kernel = Kernel {
            x: 60.0,
            y: 65.0,
            size: 30.0,
            rot: 10.0,
            layer: Layer::Midground,
        };
        let mut seq = FixedSequence::new(vec![0.5]).expect("seq");
        assert!(repel(
            &mut kernel,
            &SafeZone::HERO,
            Span::new(6.0, 12.0),
            &mut seq
        ));
        assert_eq!(kernel.y, 81.0);
    }

    #[test]
    fn kernels_outside_zone_draw_no_offset() {
        // x = 2 + 0.1 * 46 = 6.6, well left of the zone
        let mut seq = FixedSequence::new(vec![0.1, 0.4, 0.2, 0.3, 0.9]).expect("seq");
        let kernel = hero().place_one(Half::Left, 1, &mut seq);
        assert_eq!(seq.consumed(), 4);
        assert_eq!(kernel.layer, Layer::Background);
        assert!((kernel.y - (6.0 + 0.4 * 88.0)).abs() < 1e-9);
    }

    #[test]
    fn repulsion_can_leave_the_plane() {
        let config = ScatterConfig {
            count_left: 1,
            count_right: 0,
            safe_zone: SafeZone::new(0.0, 50.0, 2.0, 90.0).expect("zone"),
            ..ScatterConfig::default()
        };
        let scatter = Scatter::new(config).expect("config");
        // x = 25, y = 6 + 0.25 * 88 = 28, offset = 6
        let mut seq = FixedSequence::new(vec![0.5, 0.25, 0.0, 0.0, 0.0]).expect("seq");
        let kernels = scatter.generate(&mut seq);
        assert_eq!(kernels[0].y, -4.0);
        let stats = LayoutStats::of(&kernels, &scatter.config().safe_zone);
        assert_eq!(stats.off_plane, 1);
        assert_eq!(stats.inside_zone, 0);
    }

    #[test]
    fn stats_count_repelled_kernels() {
        let config = ScatterConfig {
            count_left: 2,
            count_right: 0,
            ..ScatterConfig::default()
        };
        let scatter = Scatter::new(config).expect("config");
        // first: x = 25, y ~= 40 -> repelled with offset 9 (five draws)
        // second: x = 2 + 0.1 * 46 = 6.6, left of the zone (four draws)
        let mut seq = FixedSequence::new(vec![
            0.5, 0.3864, 0.0, 0.0, 0.5, 0.1, 0.4, 0.2, 0.3,
        ])
        .expect("seq");
        let (kernels, stats) = scatter.generate_with_stats(&mut seq);

        assert_eq!(seq.consumed(), 9);
        assert!((kernels[0].y - 3.0).abs() < 1e-9);
        assert_eq!(stats.repelled, 1);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.inside_zone, 0);
        assert_eq!(LayoutStats::of(&kernels, &SafeZone::HERO).repelled, 0);
    }

    #[test]
    fn stats_keep_generate_layout() {
        let scatter = hero();
        let (kernels, stats) = scatter.generate_with_stats(&mut seeded(21));
        assert_eq!(kernels, scatter.generate(&mut seeded(21)));
        assert!(stats.repelled <= stats.total);
    }

    #[test]
    fn stats_for_default_layout() {
        let kernels = hero().generate(&mut seeded(11));
        let stats = LayoutStats::of(&kernels, &SafeZone::HERO);
        assert_eq!(stats.total, 24);
        assert_eq!(stats.left, 12);
        assert_eq!(stats.right, 12);
        assert_eq!(stats.foreground, 8);
        assert_eq!(stats.midground, 8);
        assert_eq!(stats.background, 8);
        assert_eq!(stats.inside_zone, 0);
    }

    #[test]
    fn validation_rejects_bad_spans() {
        let crossing = ScatterConfig {
            left_x: Span::new(2.0, 60.0),
            ..ScatterConfig::default()
        };
        assert!(matches!(
            Scatter::new(crossing),
            Err(ScatterError::SpanOutOfBounds { field: "left_x", .. })
        ));

        let inverted = ScatterConfig {
            size: Span::new(40.0, 20.0),
            ..ScatterConfig::default()
        };
        assert!(matches!(
            Scatter::new(inverted),
            Err(ScatterError::InvalidSpan { field: "size", .. })
        ));

        let zone: SafeZone =
            serde_json::from_str(r#"{"x_min":80,"x_max":20,"y_min":12,"y_max":72}"#)
                .expect("zone parses");
        let inverted_zone = ScatterConfig {
            safe_zone: zone,
            ..ScatterConfig::default()
        };
        assert!(matches!(
            Scatter::new(inverted_zone),
            Err(ScatterError::EmptyZone { axis: "x", .. })
        ));

        let nan = ScatterConfig {
            y: Span::new(f64::NAN, 94.0),
            ..ScatterConfig::default()
        };
        assert!(Scatter::new(nan).is_err());

        let zero_size = ScatterConfig {
            size: Span::new(0.0, 10.0),
            ..ScatterConfig::default()
        };
        assert!(Scatter::new(zero_size).is_err());
    }

    #[test]
    fn config_deserializes_partially() {
        let cfg: ScatterConfig =
            serde_json::from_str(r#"{"count_left": 4, "size": {"min": 10, "max": 16}}"#)
                .expect("partial config");
        assert_eq!(cfg.count_left, 4);
        assert_eq!(cfg.count_right, 12);
        assert_eq!(cfg.size, Span::new(10.0, 16.0));
        assert_eq!(cfg.safe_zone, SafeZone::HERO);
    }
}
