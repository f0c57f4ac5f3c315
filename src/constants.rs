use crate::Num;

/// Gravitational constant
pub const G: Num = 6.674e-11;

/// Gravitational constant as used by the revolution period.
///
/// Slightly coarser than [`G`]; the period calibration depends on it.
pub const G_KEPLER: Num = 6.67e-11;

/// Astronomical unit in m
pub const AU: Num = 149.6e9;

/// Model distance that corresponds to one [`AU`]
pub const REFERENCE_DISTANCE: Num = 0.49;

/// Earth radius in m
pub const EARTH_RADIUS: Num = 6.3e6;

/// Model radius that corresponds to one [`EARTH_RADIUS`]
pub const REFERENCE_RADIUS: Num = 0.05;

pub const SECONDS_PER_DAY: Num = 86_400.0;

/// Real revolution period (days) per animation time unit
pub const DISPLAY_TIME_COMPRESSION: Num = 50.0;

/// Mass of the reference person used for [`crate::Body::human_weight`], in kg
pub const REFERENCE_PERSON_MASS: Num = 68.0;

/// Newtons per pound-force
pub const NEWTONS_PER_POUND: Num = 4.4482216;

pub const SUN_MASS: Num = 1.989e30;
pub const SUN_RADIUS: Num = 0.15;
pub const SUN_ROTATION_PERIOD: Num = 10.0;

pub const PLANET_MASS: Num = 5e24;
pub const PLANET_RADIUS: Num = 0.05;
pub const PLANET_ROTATION_PERIOD: Num = 30.0;

pub const MOON_MASS: Num = 7.34767e22;
pub const MOON_RADIUS: Num = 0.005;
pub const MOON_ROTATION_PERIOD: Num = 30.0;
pub const MOON_DISTANCE: Num = 0.1;

pub const SLIDER_MIN: Num = 0.1;
pub const SLIDER_MAX: Num = 2.0;

/// Initial position of every slider
pub const SLIDER_CALIBRATION: Num = 1.05;

pub use std::f64::consts::PI;

pub const TWO_PI: Num = 2.0 * PI;
