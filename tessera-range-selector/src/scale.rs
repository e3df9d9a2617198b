//! Mapping between domain values and normalized track positions.
//!
//! [`RangeScale`] owns the selectable interval of a range selector and
//! converts in both directions between domain values and track fractions in
//! `[0.0, 1.0]`. Two modes exist: a continuous interval where any value
//! between the bounds is selectable, and a discrete mode restricted to a
//! fixed, strictly increasing list of stop values.

use thiserror::Error;

/// Fraction of the full span used for one assistive increment/decrement step
/// in continuous mode.
const CONTINUOUS_NUDGE_FRACTION: f64 = 0.05;

/// Validation failure for a [`RangeScale`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// A bound is NaN or infinite.
    #[error("range bounds must be finite")]
    NonFiniteBound,
    /// The continuous interval is empty or inverted.
    #[error("continuous range requires lower < upper, got {lower}..{upper}")]
    EmptyInterval {
        /// The configured lower bound.
        lower: f64,
        /// The configured upper bound.
        upper: f64,
    },
    /// The discrete stop list is empty.
    #[error("discrete range requires at least one stop value")]
    NoStops,
    /// The discrete stop list is not finite and strictly increasing.
    #[error("discrete stop values must be finite and strictly increasing")]
    UnorderedStops,
}

/// The selectable interval of a range selector.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeScale {
    /// Any value between the two bounds is selectable.
    Continuous {
        /// Smallest selectable value.
        lower: f64,
        /// Largest selectable value.
        upper: f64,
    },
    /// Only the listed stop values are selectable.
    ///
    /// The list must be strictly increasing; the first and last entries act
    /// as the bounds of the range.
    Discrete {
        /// The ordered stop values.
        stops: Vec<f64>,
    },
}

impl RangeScale {
    /// Creates a continuous scale over `lower..upper`.
    pub fn continuous(lower: f64, upper: f64) -> Self {
        Self::Continuous { lower, upper }
    }

    /// Creates a discrete scale over the given stop values.
    pub fn discrete(stops: impl Into<Vec<f64>>) -> Self {
        Self::Discrete {
            stops: stops.into(),
        }
    }

    /// Checks that this scale describes a usable interval.
    ///
    /// The range selector refuses to render interactive content for a scale
    /// that fails validation.
    pub fn validate(&self) -> Result<(), ScaleError> {
        match self {
            Self::Continuous { lower, upper } => {
                if !lower.is_finite() || !upper.is_finite() {
                    return Err(ScaleError::NonFiniteBound);
                }
                if lower >= upper {
                    return Err(ScaleError::EmptyInterval {
                        lower: *lower,
                        upper: *upper,
                    });
                }
                Ok(())
            }
            Self::Discrete { stops } => {
                if stops.is_empty() {
                    return Err(ScaleError::NoStops);
                }
                if stops.iter().any(|stop| !stop.is_finite()) {
                    return Err(ScaleError::UnorderedStops);
                }
                if stops.windows(2).any(|pair| pair[0] >= pair[1]) {
                    return Err(ScaleError::UnorderedStops);
                }
                Ok(())
            }
        }
    }

    /// Smallest selectable value.
    pub fn lower_bound(&self) -> f64 {
        match self {
            Self::Continuous { lower, .. } => *lower,
            Self::Discrete { stops } => stops.first().copied().unwrap_or(f64::NAN),
        }
    }

    /// Largest selectable value.
    pub fn upper_bound(&self) -> f64 {
        match self {
            Self::Continuous { upper, .. } => *upper,
            Self::Discrete { stops } => stops.last().copied().unwrap_or(f64::NAN),
        }
    }

    /// Maps a domain value onto a track fraction.
    ///
    /// Continuous values map linearly between the bounds. Discrete values map
    /// to `index / (len - 1)` of the nearest stop, so a value that is not an
    /// exact member of the stop list still yields a position inside the
    /// track instead of an out-of-range one. A single-stop scale always maps
    /// to `0.0`.
    pub fn to_fraction(&self, value: f64) -> f64 {
        match self {
            Self::Continuous { lower, upper } => (value - lower) / (upper - lower),
            Self::Discrete { stops } => {
                if stops.len() < 2 {
                    return 0.0;
                }
                let index = nearest_stop_index(stops, value);
                index as f64 / (stops.len() - 1) as f64
            }
        }
    }

    /// Maps a track fraction back onto a domain value.
    ///
    /// Continuous fractions map linearly. Discrete fractions round to the
    /// nearest stop index, clamped into the list.
    pub fn from_fraction(&self, fraction: f64) -> f64 {
        match self {
            Self::Continuous { lower, upper } => lower + fraction * (upper - lower),
            Self::Discrete { stops } => {
                if stops.is_empty() {
                    return f64::NAN;
                }
                let last = stops.len() - 1;
                let index = (fraction * last as f64).round();
                let index = (index.max(0.0) as usize).min(last);
                stops[index]
            }
        }
    }

    /// Resolves a pointer position on the track to a domain value.
    ///
    /// The raw fraction `(cursor_x - track_start) / track_width` is clamped
    /// into `[0.0, 1.0]` before the conversion, so a pointer beyond either
    /// end of the track resolves to the corresponding bound.
    pub fn value_at_pointer(&self, cursor_x: f32, track_start: f32, track_width: f32) -> f64 {
        let fraction = if track_width > 0.0 {
            (f64::from(cursor_x) - f64::from(track_start)) / f64::from(track_width)
        } else {
            0.0
        };
        self.from_fraction(fraction.clamp(0.0, 1.0))
    }

    /// Clamps a value into the selectable interval.
    ///
    /// Discrete scales additionally snap to the nearest stop.
    pub fn clamp(&self, value: f64) -> f64 {
        match self {
            Self::Continuous { lower, upper } => value.clamp(*lower, *upper),
            Self::Discrete { stops } => {
                if stops.is_empty() {
                    return value;
                }
                stops[nearest_stop_index(stops, value)]
            }
        }
    }

    /// Moves a value by the given number of assistive steps.
    ///
    /// Continuous scales step by 5% of the span, discrete scales step to the
    /// neighboring stop. The result stays inside the selectable interval.
    pub fn nudged(&self, value: f64, steps: i64) -> f64 {
        match self {
            Self::Continuous { lower, upper } => {
                let delta = (upper - lower) * CONTINUOUS_NUDGE_FRACTION;
                (value + delta * steps as f64).clamp(*lower, *upper)
            }
            Self::Discrete { stops } => {
                if stops.is_empty() {
                    return value;
                }
                let index = nearest_stop_index(stops, value) as i64 + steps;
                let index = index.clamp(0, stops.len() as i64 - 1);
                stops[index as usize]
            }
        }
    }
}

/// Index of the stop closest to `value`. The list must be sorted ascending
/// and non-empty.
fn nearest_stop_index(stops: &[f64], value: f64) -> usize {
    let upper = stops.partition_point(|stop| *stop < value);
    if upper == 0 {
        return 0;
    }
    if upper == stops.len() {
        return stops.len() - 1;
    }
    if value - stops[upper - 1] <= stops[upper] - value {
        upper - 1
    } else {
        upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICE_STOPS: [f64; 6] = [1.99, 5.99, 10.99, 30.99, 50.99, 70.99];

    #[test]
    fn continuous_round_trip() {
        let scale = RangeScale::continuous(1.0, 100.0);
        for value in [1.0, 2.5, 37.21, 99.0, 100.0] {
            let round_tripped = scale.from_fraction(scale.to_fraction(value));
            assert!(
                (round_tripped - value).abs() < 1e-9,
                "{value} round-tripped to {round_tripped}"
            );
        }
    }

    #[test]
    fn discrete_round_trip_is_exact() {
        let scale = RangeScale::discrete(PRICE_STOPS);
        for value in PRICE_STOPS {
            assert_eq!(scale.from_fraction(scale.to_fraction(value)), value);
        }
    }

    #[test]
    fn discrete_endpoints_sit_at_track_ends() {
        let scale = RangeScale::discrete(PRICE_STOPS);
        assert_eq!(scale.to_fraction(1.99), 0.0);
        assert_eq!(scale.to_fraction(70.99), 1.0);
    }

    #[test]
    fn discrete_lookup_miss_maps_to_nearest_stop() {
        let scale = RangeScale::discrete(PRICE_STOPS);
        // 6.0 is not a stop; 5.99 is its nearest neighbor at index 1.
        assert_eq!(scale.to_fraction(6.0), 1.0 / 5.0);
        // Far outside the interval on both ends.
        assert_eq!(scale.to_fraction(-100.0), 0.0);
        assert_eq!(scale.to_fraction(1000.0), 1.0);
    }

    #[test]
    fn from_fraction_rounds_to_nearest_index() {
        let scale = RangeScale::discrete(PRICE_STOPS);
        assert_eq!(scale.from_fraction(0.0), 1.99);
        assert_eq!(scale.from_fraction(0.09), 1.99);
        assert_eq!(scale.from_fraction(0.11), 5.99);
        assert_eq!(scale.from_fraction(1.0), 70.99);
    }

    #[test]
    fn pointer_position_clamps_to_track() {
        let scale = RangeScale::continuous(0.0, 100.0);
        assert_eq!(scale.value_at_pointer(-50.0, 0.0, 200.0), 0.0);
        assert_eq!(scale.value_at_pointer(100.0, 0.0, 200.0), 50.0);
        assert_eq!(scale.value_at_pointer(500.0, 0.0, 200.0), 100.0);
        // Offset track start.
        assert_eq!(scale.value_at_pointer(110.0, 10.0, 200.0), 50.0);
    }

    #[test]
    fn pointer_on_degenerate_track_resolves_to_lower_bound() {
        let scale = RangeScale::continuous(5.0, 10.0);
        assert_eq!(scale.value_at_pointer(42.0, 0.0, 0.0), 5.0);
    }

    #[test]
    fn clamp_snaps_discrete_values() {
        let scale = RangeScale::discrete(PRICE_STOPS);
        assert_eq!(scale.clamp(6.0), 5.99);
        assert_eq!(scale.clamp(0.0), 1.99);
        assert_eq!(scale.clamp(99.0), 70.99);

        let continuous = RangeScale::continuous(10.0, 20.0);
        assert_eq!(continuous.clamp(5.0), 10.0);
        assert_eq!(continuous.clamp(15.0), 15.0);
        assert_eq!(continuous.clamp(25.0), 20.0);
    }

    #[test]
    fn nudge_steps_by_span_fraction_or_stop() {
        let continuous = RangeScale::continuous(0.0, 100.0);
        assert_eq!(continuous.nudged(50.0, 1), 55.0);
        assert_eq!(continuous.nudged(99.0, 1), 100.0);
        assert_eq!(continuous.nudged(1.0, -1), 0.0);

        let discrete = RangeScale::discrete(PRICE_STOPS);
        assert_eq!(discrete.nudged(5.99, 1), 10.99);
        assert_eq!(discrete.nudged(5.99, -1), 1.99);
        assert_eq!(discrete.nudged(1.99, -1), 1.99);
        assert_eq!(discrete.nudged(70.99, 1), 70.99);
    }

    #[test]
    fn validation_rejects_degenerate_configurations() {
        assert!(RangeScale::continuous(1.0, 100.0).validate().is_ok());
        assert_eq!(
            RangeScale::continuous(10.0, 10.0).validate(),
            Err(ScaleError::EmptyInterval {
                lower: 10.0,
                upper: 10.0
            })
        );
        assert_eq!(
            RangeScale::continuous(f64::NAN, 10.0).validate(),
            Err(ScaleError::NonFiniteBound)
        );
        assert_eq!(
            RangeScale::discrete(Vec::new()).validate(),
            Err(ScaleError::NoStops)
        );
        assert_eq!(
            RangeScale::discrete([1.0, 1.0, 2.0]).validate(),
            Err(ScaleError::UnorderedStops)
        );
        assert!(RangeScale::discrete([4.0]).validate().is_ok());
        assert!(RangeScale::discrete(PRICE_STOPS).validate().is_ok());
    }
}
