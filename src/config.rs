//! Presets and calibration for a [`crate::Registry`].
//!
//! Every field defaults to the values the playground ships with, so a
//! configuration file only has to name what it changes:
//!
//! ```toml
//! initial_speed = 0.5
//!
//! [moon]
//! mass = 7.34767e22
//! radius = 0.01
//! rotation_period = 27.0
//! ```
//!
//! Loading from TOML requires the `serde` feature.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::slider::SliderRange;
use crate::Num;

/// Physical parameters a new body starts with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Preset {
    /// kg
    pub mass: Num,
    /// Model units
    pub radius: Num,
    /// Days
    pub rotation_period: Num,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Also the reference for the central body's mass and radius sliders
    pub sun: Preset,
    /// Also the reference for every orbiting body's mass and radius sliders
    pub planet: Preset,
    pub moon: Preset,
    /// Ring radius of a new moon
    pub moon_distance: Num,
    pub slider: SliderRange,
    pub initial_scale: Num,
    pub initial_speed: Num,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sun: Preset {
                mass: SUN_MASS,
                radius: SUN_RADIUS,
                rotation_period: SUN_ROTATION_PERIOD,
            },
            planet: Preset {
                mass: PLANET_MASS,
                radius: PLANET_RADIUS,
                rotation_period: PLANET_ROTATION_PERIOD,
            },
            moon: Preset {
                mass: MOON_MASS,
                radius: MOON_RADIUS,
                rotation_period: MOON_ROTATION_PERIOD,
            },
            moon_distance: MOON_DISTANCE,
            slider: SliderRange::default(),
            initial_scale: 1.0,
            initial_speed: 1.0,
        }
    }
}

impl Config {
    /// Reference mass behind the mass slider.
    pub fn mass_reference(&self, central: bool) -> Num {
        if central {
            self.sun.mass
        } else {
            self.planet.mass
        }
    }

    /// Reference radius behind the radius slider.
    pub fn radius_reference(&self, central: bool) -> Num {
        if central {
            self.sun.radius
        } else {
            self.planet.radius
        }
    }

    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> crate::Result<Self> {
        toml::from_str(source).map_err(|e| crate::Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_follow_body_kind() {
        let config = Config::default();

        assert_eq!(config.mass_reference(true), 1.989e30);
        assert_eq!(config.mass_reference(false), 5e24);
        assert_eq!(config.radius_reference(true), 0.15);
        assert_eq!(config.radius_reference(false), 0.05);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            initial_speed = 0.5

            [moon]
            mass = 7.34767e22
            radius = 0.01
            rotation_period = 27.0
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_speed, 0.5);
        assert_eq!(config.moon.radius, 0.01);
        assert_eq!(config.sun, Config::default().sun);
        assert_eq!(config.slider, SliderRange::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn malformed_toml_is_a_config_error() {
        assert!(matches!(
            Config::from_toml_str("initial_speed = \"fast\""),
            Err(crate::Error::Config(_))
        ));
    }
}
