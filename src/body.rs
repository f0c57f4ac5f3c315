#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::astro;
use crate::constants::SECONDS_PER_DAY;
use crate::error::{positive, Precondition, Result};
use crate::{BodyId, Num};

/// The non-orbiting body anchoring a system.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CentralBody {
    /// kg
    pub mass: Num,
    /// Model units
    pub radius: Num,
    /// Days
    pub rotation_period: Num,
}

/// A body revolving around `parent` on a circular ring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitingBody {
    pub parent: BodyId,
    /// kg
    pub mass: Num,
    /// Model units
    pub radius: Num,
    /// Ring radius in model units
    pub distance: Num,
    /// Days
    pub rotation_period: Num,
    /// Ring radius at distance slider value 1.0
    pub base_distance: Num,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Body {
    Central(CentralBody),
    Orbiting(OrbitingBody),
}

impl CentralBody {
    pub fn new(mass: Num, radius: Num, rotation_period: Num) -> Result<Self> {
        Ok(Self {
            mass: positive("mass", mass)?,
            radius: positive("radius", radius)?,
            rotation_period,
        })
    }
}

impl OrbitingBody {
    pub fn new(
        parent: BodyId,
        mass: Num,
        radius: Num,
        distance: Num,
        rotation_period: Num,
        base_distance: Num,
    ) -> Result<Self> {
        Ok(Self {
            parent,
            mass: positive("mass", mass)?,
            radius: positive("radius", radius)?,
            distance: positive("distance", distance)?,
            rotation_period,
            base_distance: positive("base distance", base_distance)?,
        })
    }

    /// Ring radius in m
    pub fn actual_distance(&self) -> Num {
        astro::actual_distance(self.distance)
    }

    /// Sidereal day in seconds
    pub fn actual_rotation_period(&self) -> Num {
        self.rotation_period * SECONDS_PER_DAY
    }

    /// https://en.wikipedia.org/wiki/Orbital_period
    ///
    /// Real revolution period in days around a parent of `parent_mass` kg.
    pub fn actual_revolution_period(&self, parent_mass: Num) -> Num {
        astro::period_days(self.actual_distance(), parent_mass)
    }

    /// Revolution period in animation time units.
    pub fn revolution_period(&self, parent_mass: Num) -> Num {
        astro::compress_days(self.actual_revolution_period(parent_mass))
    }

    /// Weight of a 68 kg person standing on this body, in lbf.
    pub fn human_weight(&self) -> Num {
        astro::human_weight(astro::surface_gravity(
            self.mass,
            astro::actual_radius(self.radius),
        ))
    }

    /// Attraction between this body and its parent, in N.
    pub fn force_of_gravity(&self, parent_mass: Num) -> Num {
        astro::gravitational_force(self.mass, parent_mass, self.actual_distance())
    }

    /// Where the distance slider sits for the current ring radius.
    pub fn distance_ratio(&self) -> Num {
        self.distance / self.base_distance
    }
}

impl Body {
    pub fn central(mass: Num, radius: Num, rotation_period: Num) -> Result<Self> {
        CentralBody::new(mass, radius, rotation_period).map(Body::Central)
    }

    pub fn orbiting(
        parent: BodyId,
        mass: Num,
        radius: Num,
        distance: Num,
        rotation_period: Num,
        base_distance: Num,
    ) -> Result<Self> {
        OrbitingBody::new(parent, mass, radius, distance, rotation_period, base_distance)
            .map(Body::Orbiting)
    }

    pub fn is_central(&self) -> bool {
        matches!(self, Body::Central(_))
    }

    pub fn as_orbiting(&self) -> Option<&OrbitingBody> {
        match self {
            Body::Orbiting(orbiting) => Some(orbiting),
            Body::Central(_) => None,
        }
    }

    pub fn parent(&self) -> Option<BodyId> {
        self.as_orbiting().map(|o| o.parent)
    }

    pub fn mass(&self) -> Num {
        match self {
            Body::Central(c) => c.mass,
            Body::Orbiting(o) => o.mass,
        }
    }

    pub fn radius(&self) -> Num {
        match self {
            Body::Central(c) => c.radius,
            Body::Orbiting(o) => o.radius,
        }
    }

    pub fn rotation_period(&self) -> Num {
        match self {
            Body::Central(c) => c.rotation_period,
            Body::Orbiting(o) => o.rotation_period,
        }
    }

    /// Mass in kg. Model mass is already in kg.
    pub fn actual_mass(&self) -> Num {
        self.mass()
    }

    /// Radius in m
    pub fn actual_radius(&self) -> Num {
        astro::actual_radius(self.radius())
    }

    /// https://en.wikipedia.org/wiki/Escape_velocity
    pub fn escape_velocity(&self) -> Num {
        astro::escape_velocity(self.actual_mass(), self.actual_radius())
    }

    /// https://en.wikipedia.org/wiki/Surface_gravity
    pub fn surface_gravity(&self) -> Num {
        astro::surface_gravity(self.actual_mass(), self.actual_radius())
    }

    pub fn set_mass(&mut self, mass: Num) -> Result<()> {
        let mass = positive("mass", mass)?;
        match self {
            Body::Central(c) => c.mass = mass,
            Body::Orbiting(o) => o.mass = mass,
        }
        Ok(())
    }

    pub fn set_radius(&mut self, radius: Num) -> Result<()> {
        let radius = positive("radius", radius)?;
        match self {
            Body::Central(c) => c.radius = radius,
            Body::Orbiting(o) => o.radius = radius,
        }
        Ok(())
    }

    /// Fails with [`Precondition::NotOrbiting`] for the central body; `id` is
    /// only used to label that error.
    pub fn set_distance(&mut self, id: BodyId, distance: Num) -> Result<()> {
        let distance = positive("distance", distance)?;
        match self {
            Body::Orbiting(o) => {
                o.distance = distance;
                Ok(())
            }
            Body::Central(_) => Err(Precondition::NotOrbiting(id).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::Error;

    fn sun() -> Body {
        Body::central(SUN_MASS, SUN_RADIUS, SUN_ROTATION_PERIOD).unwrap()
    }

    fn earth() -> OrbitingBody {
        OrbitingBody::new(
            BodyId::from_raw(0),
            PLANET_MASS,
            PLANET_RADIUS,
            REFERENCE_DISTANCE,
            PLANET_ROTATION_PERIOD,
            REFERENCE_DISTANCE,
        )
        .unwrap()
    }

    #[test]
    fn sun_surface_gravity() {
        let expected = 6.674e-11 * 1.989e30 / (0.15 / 0.05 * 6.3e6_f64).powi(2);
        let g = sun().surface_gravity();

        assert!((g - expected).abs() / expected < 1e-12, "{g} != {expected}");
    }

    #[test]
    fn escape_velocity_from_surface_gravity() {
        let sun = sun();
        let expected = (2.0 * sun.surface_gravity() * sun.actual_radius()).sqrt();

        assert!((sun.escape_velocity() - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn earth_like_year() {
        let days = earth().actual_revolution_period(SUN_MASS);

        assert!((days - 365.25).abs() < 365.25 * 0.02, "{days}");
        assert!((earth().revolution_period(SUN_MASS) - days / 50.0).abs() < 1e-9);
    }

    #[test]
    fn earth_like_planet_weighs_a_person() {
        let weight = earth().human_weight();
        let g = Body::Orbiting(earth()).surface_gravity();

        assert!((weight - 68.0 * g / 4.4482216).abs() < 1e-9);
    }

    #[test]
    fn force_of_gravity_uses_both_masses() {
        let f = earth().force_of_gravity(SUN_MASS);
        let expected = G * PLANET_MASS * SUN_MASS / AU.powi(2);

        assert!((f - expected).abs() / expected < 1e-9);
    }

    #[test]
    fn rotation_period_in_seconds() {
        assert_eq!(earth().actual_rotation_period(), 30.0 * 86_400.0);
    }

    #[test]
    fn rejects_non_positive_parameters() {
        assert!(matches!(
            Body::central(0.0, SUN_RADIUS, 10.0),
            Err(Error::InvalidParameter { name: "mass", .. })
        ));
        assert!(matches!(
            Body::orbiting(BodyId::from_raw(0), 1.0, 1.0, -0.2, 1.0, 0.2),
            Err(Error::InvalidParameter { name: "distance", .. })
        ));

        let mut body = sun();
        assert!(body.set_radius(Num::NAN).is_err());
        assert_eq!(body.radius(), SUN_RADIUS);
    }

    #[test]
    fn distance_only_for_orbiting_bodies() {
        let id = BodyId::from_raw(3);
        let mut body = sun();

        assert!(matches!(
            body.set_distance(id, 0.3),
            Err(Error::PreconditionNotMet(Precondition::NotOrbiting(i))) if i == id
        ));

        let mut planet = Body::Orbiting(earth());
        planet.set_distance(id, 0.98).unwrap();
        assert_eq!(planet.as_orbiting().map(|o| o.distance_ratio()), Some(2.0));
    }

    #[test]
    fn derived_values_follow_mutations() {
        let mut body = sun();
        let before = body.surface_gravity();
        body.set_mass(SUN_MASS * 2.0).unwrap();

        assert!((body.surface_gravity() - 2.0 * before).abs() / before < 1e-12);
    }
}
