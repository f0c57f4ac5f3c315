#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{SLIDER_CALIBRATION, SLIDER_MAX, SLIDER_MIN};
use crate::error::{positive, Result};
use crate::Num;

/// Range of every slider in the control panel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SliderRange {
    pub min: Num,
    pub max: Num,
    /// Initial slider position
    pub calibration: Num,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min: SLIDER_MIN,
            max: SLIDER_MAX,
            calibration: SLIDER_CALIBRATION,
        }
    }
}

impl SliderRange {
    /// Clamps `value` into the range. Non-finite or non-positive values are
    /// rejected rather than clamped.
    pub fn normalize(&self, value: Num) -> Result<Num> {
        positive("slider value", value).map(|v| v.clamp(self.min, self.max))
    }

    /// The speed slider runs backwards: further right means shorter
    /// animation durations.
    pub fn speed_from_slider(&self, value: Num) -> Result<Num> {
        let value = self.normalize(value)?;
        Ok(self.max + self.min - value)
    }
}

/// Slider positions that reproduce the current state of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderReadback {
    pub mass: Num,
    pub radius: Num,
    /// `None` for the central body
    pub distance: Option<Num>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1.05, 1.05 ; "calibration point")]
    #[test_case(0.01, 0.1 ; "below range")]
    #[test_case(7.0, 2.0 ; "above range")]
    fn normalize(value: Num, expected: Num) {
        assert_eq!(SliderRange::default().normalize(value).unwrap(), expected);
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(-1.0 ; "negative")]
    #[test_case(Num::INFINITY ; "infinite")]
    fn normalize_rejects(value: Num) {
        assert!(SliderRange::default().normalize(value).is_err());
    }

    #[test]
    fn speed_slider_is_inverted() {
        let range = SliderRange::default();

        assert!((range.speed_from_slider(2.0).unwrap() - 0.1).abs() < 1e-12);
        assert!((range.speed_from_slider(0.1).unwrap() - 2.0).abs() < 1e-12);
        assert!((range.speed_from_slider(1.05).unwrap() - 1.05).abs() < 1e-12);
    }
}
