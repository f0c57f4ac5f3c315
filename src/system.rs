use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::arena::Arena;
use crate::body::{CentralBody, OrbitingBody};
use crate::error::{Precondition, Result};
use crate::{Body, BodyId, Num, Vec3};

/// One central body plus every body orbiting it, directly or through
/// another orbiting body.
///
/// Invariant: the parent of every orbiting body is alive in the same system.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct System {
    bodies: Arena<Body>,
    central: BodyId,
    orbiting: Vec<BodyId>,
    origin: Vec3,
}

impl System {
    /// `origin` is the world position of the central body.
    pub fn new(central: CentralBody, origin: Vec3) -> Self {
        let mut bodies = Arena::new();
        let central = bodies.push(Body::Central(central));

        Self {
            bodies,
            central,
            orbiting: Vec::new(),
            origin,
        }
    }

    pub fn central(&self) -> BodyId {
        self.central
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Orbiting bodies in the order they were added.
    pub fn orbiting(&self) -> &[BodyId] {
        &self.orbiting
    }

    /// Number of bodies, central body included.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.contains(id)
    }

    pub fn get(&self, id: BodyId) -> Result<&Body> {
        self.bodies
            .get(id)
            .ok_or_else(|| Precondition::UnknownBody(id).into())
    }

    pub fn get_mut(&mut self, id: BodyId) -> Result<&mut Body> {
        self.bodies
            .get_mut(id)
            .ok_or_else(|| Precondition::UnknownBody(id).into())
    }

    pub fn orbiting_body(&self, id: BodyId) -> Result<&OrbitingBody> {
        self.get(id)?
            .as_orbiting()
            .ok_or_else(|| Precondition::NotOrbiting(id).into())
    }

    /// Central body first, then orbiting bodies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        std::iter::once(self.central)
            .chain(self.orbiting.iter().copied())
            .filter_map(|id| self.bodies.get(id).map(|body| (id, body)))
    }

    pub fn insert(&mut self, body: OrbitingBody) -> Result<BodyId> {
        if !self.bodies.contains(body.parent) {
            return Err(Precondition::UnknownBody(body.parent).into());
        }

        let id = self.bodies.push(Body::Orbiting(body));
        self.orbiting.push(id);

        Ok(id)
    }

    /// Direct satellites of `id`.
    pub fn children(&self, id: BodyId) -> Vec<BodyId> {
        self.orbiting
            .iter()
            .copied()
            .filter(|child| {
                self.bodies
                    .get(*child)
                    .and_then(Body::parent)
                    .is_some_and(|parent| parent == id)
            })
            .collect()
    }

    /// Every body that orbits `id`, directly or transitively, breadth first.
    pub fn descendants(&self, id: BodyId) -> Vec<BodyId> {
        let mut found = Vec::new();
        let mut queue = VecDeque::from([id]);

        while let Some(next) = queue.pop_front() {
            for child in self.children(next) {
                found.push(child);
                queue.push_back(child);
            }
        }

        found
    }

    /// Removes `id` together with everything orbiting it.
    ///
    /// Returns the removed ids, `id` first. The central body cannot be
    /// removed this way; dropping the whole system is the caller's job.
    pub fn remove(&mut self, id: BodyId) -> Result<Vec<BodyId>> {
        if id == self.central {
            return Err(Precondition::NotOrbiting(id).into());
        }
        self.get(id)?;

        let mut removed = vec![id];
        removed.extend(self.descendants(id));

        for gone in &removed {
            self.bodies.remove(*gone);
        }
        self.orbiting.retain(|body| !removed.contains(body));

        Ok(removed)
    }

    pub fn parent_mass(&self, id: BodyId) -> Result<Num> {
        let parent = self.orbiting_body(id)?.parent;
        Ok(self.get(parent)?.actual_mass())
    }

    /// Real revolution period of `id` around its parent, in days.
    pub fn actual_revolution_period(&self, id: BodyId) -> Result<Num> {
        let parent_mass = self.parent_mass(id)?;
        Ok(self.orbiting_body(id)?.actual_revolution_period(parent_mass))
    }

    /// Revolution period of `id` in animation time units.
    pub fn revolution_period(&self, id: BodyId) -> Result<Num> {
        let parent_mass = self.parent_mass(id)?;
        Ok(self.orbiting_body(id)?.revolution_period(parent_mass))
    }

    pub fn force_of_gravity(&self, id: BodyId) -> Result<Num> {
        let parent_mass = self.parent_mass(id)?;
        Ok(self.orbiting_body(id)?.force_of_gravity(parent_mass))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::Error;

    fn system() -> System {
        System::new(
            CentralBody::new(SUN_MASS, SUN_RADIUS, SUN_ROTATION_PERIOD).unwrap(),
            Vec3::ZERO,
        )
    }

    fn orbiting(parent: BodyId, distance: Num) -> OrbitingBody {
        OrbitingBody::new(parent, PLANET_MASS, PLANET_RADIUS, distance, 30.0, distance).unwrap()
    }

    #[test]
    fn descendants_walk_the_whole_subtree() {
        let mut system = system();
        let sun = system.central();
        let a = system.insert(orbiting(sun, 0.4)).unwrap();
        let b = system.insert(orbiting(sun, 0.6)).unwrap();
        let a_moon = system.insert(orbiting(a, 0.1)).unwrap();
        let a_moon_moon = system.insert(orbiting(a_moon, 0.01)).unwrap();

        assert_eq!(system.children(sun), vec![a, b]);
        assert_eq!(system.descendants(a), vec![a_moon, a_moon_moon]);
        assert_eq!(system.descendants(sun).len(), 4);
        assert!(system.descendants(b).is_empty());
    }

    #[test]
    fn remove_cascades_to_satellites() {
        let mut system = system();
        let sun = system.central();
        let a = system.insert(orbiting(sun, 0.4)).unwrap();
        let b = system.insert(orbiting(sun, 0.6)).unwrap();
        let moon = system.insert(orbiting(a, 0.1)).unwrap();

        let removed = system.remove(a).unwrap();

        assert_eq!(removed, vec![a, moon]);
        assert_eq!(system.orbiting(), &[b]);
        assert!(!system.contains(moon));
        assert_eq!(system.len(), 2);
    }

    #[test]
    fn central_body_is_not_removable() {
        let mut system = system();
        let sun = system.central();

        assert!(matches!(
            system.remove(sun),
            Err(Error::PreconditionNotMet(Precondition::NotOrbiting(_)))
        ));
    }

    #[test]
    fn insert_requires_live_parent() {
        let mut system = system();
        let sun = system.central();
        let a = system.insert(orbiting(sun, 0.4)).unwrap();
        system.remove(a).unwrap();

        assert!(matches!(
            system.insert(orbiting(a, 0.1)),
            Err(Error::PreconditionNotMet(Precondition::UnknownBody(id))) if id == a
        ));
    }

    #[test]
    fn revolution_period_tracks_parent_mass() {
        let mut system = system();
        let sun = system.central();
        let a = system.insert(orbiting(sun, REFERENCE_DISTANCE)).unwrap();
        let before = system.revolution_period(a).unwrap();

        system.get_mut(sun).unwrap().set_mass(SUN_MASS * 4.0).unwrap();

        let after = system.revolution_period(a).unwrap();
        assert!((after - before / 2.0).abs() < 1e-9);
    }
}
