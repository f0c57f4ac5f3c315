use crate::constants::{
    AU, DISPLAY_TIME_COMPRESSION, EARTH_RADIUS, G, G_KEPLER, NEWTONS_PER_POUND,
    REFERENCE_DISTANCE, REFERENCE_PERSON_MASS, REFERENCE_RADIUS, SECONDS_PER_DAY, TWO_PI,
};
use crate::Num;

/// https://en.wikipedia.org/wiki/Standard_gravitational_parameter
#[inline]
pub fn standard_gravitational_parameter(mass: Num) -> Num {
    G * mass
}

/// Converts a model radius into meters.
#[inline]
pub fn actual_radius(radius: Num) -> Num {
    radius / (REFERENCE_RADIUS / EARTH_RADIUS)
}

/// Converts a model distance into meters.
#[inline]
pub fn actual_distance(distance: Num) -> Num {
    distance * (AU / REFERENCE_DISTANCE)
}

/// https://en.wikipedia.org/wiki/Escape_velocity
///
/// `actual_radius` in m, result in m/s.
pub fn escape_velocity(mass: Num, actual_radius: Num) -> Num {
    (2.0 * standard_gravitational_parameter(mass) / actual_radius).sqrt()
}

/// https://en.wikipedia.org/wiki/Surface_gravity
pub fn surface_gravity(mass: Num, actual_radius: Num) -> Num {
    standard_gravitational_parameter(mass) / actual_radius.powi(2)
}

/// https://en.wikipedia.org/wiki/Newton%27s_law_of_universal_gravitation
pub fn gravitational_force(m1: Num, m2: Num, actual_distance: Num) -> Num {
    G * m1 * m2 / actual_distance.powi(2)
}

/// https://en.wikipedia.org/wiki/Orbital_period
///
/// `a` in m, `mass` of the orbited body in kg. Result in seconds.
pub fn period(a: Num, mass: Num) -> Num {
    TWO_PI * (a.powi(3) / (mass * G_KEPLER)).sqrt()
}

/// Orbital period in days
pub fn period_days(a: Num, mass: Num) -> Num {
    period(a, mass) / SECONDS_PER_DAY
}

/// Animation time units for a revolution that really takes `days`
#[inline]
pub fn compress_days(days: Num) -> Num {
    days / DISPLAY_TIME_COMPRESSION
}

/// Weight of the reference person in lbf under `surface_gravity`.
pub fn human_weight(surface_gravity: Num) -> Num {
    REFERENCE_PERSON_MASS * surface_gravity / NEWTONS_PER_POUND
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn reference_radius_is_earth() {
        let r = actual_radius(REFERENCE_RADIUS);
        assert!((r - EARTH_RADIUS).abs() / EARTH_RADIUS < 1e-12);
    }

    #[test]
    fn reference_distance_is_one_au() {
        let d = actual_distance(REFERENCE_DISTANCE);
        assert!((d - AU).abs() / AU < 1e-12);
    }

    #[test_case(1.989e30, 0.15 ; "sun")]
    #[test_case(5e24, 0.05 ; "planet")]
    #[test_case(7.34767e22, 0.005 ; "moon")]
    fn escape_velocity_matches_surface_gravity(mass: Num, radius: Num) {
        let r = actual_radius(radius);
        let expected = (2.0 * surface_gravity(mass, r) * r).sqrt();
        let v = escape_velocity(mass, r);

        assert!((v - expected).abs() / expected < 1e-12, "{v} != {expected}");
    }

    #[test]
    fn earth_year() {
        let days = period_days(AU, 1.989e30);

        assert!((days - 365.25).abs() < 365.25 * 0.02, "{days}");
    }
}
