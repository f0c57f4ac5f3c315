//! The presentation side of a [`crate::Registry`].
//!
//! The registry never draws anything itself. It tells a [`Renderer`] which
//! spheres and rings exist, how large they are and how long one rotation or
//! revolution should take. Running the animations is left to the renderer;
//! every assignment simply replaces the previous one.

use std::collections::{BTreeMap, BTreeSet};

use crate::{BodyId, Num, Vec3};

pub trait Renderer {
    /// World position of the viewer, if tracking currently knows it.
    fn camera_position(&self) -> Option<Vec3>;

    /// Current rotation of the ring carrying `body`, in radians.
    fn ring_phase(&self, body: BodyId) -> Num;

    /// Adds the sphere for `body`. `position` is in world space for the
    /// central body and relative to the carrying ring otherwise.
    fn attach_body(&mut self, body: BodyId, sphere_radius: Num, position: Vec3);

    /// Adds the ring that carries `body`, centered on `parent`.
    fn attach_ring(&mut self, body: BodyId, parent: BodyId, ring_radius: Num);

    /// Removes the sphere and ring of `body`.
    fn detach(&mut self, body: BodyId);

    fn set_sphere_radius(&mut self, body: BodyId, radius: Num);

    fn set_ring_radius(&mut self, body: BodyId, radius: Num);

    fn set_position(&mut self, body: BodyId, position: Vec3);

    /// Uniform scale of the sphere and ring of `body`.
    fn set_scale(&mut self, body: BodyId, scale: Num);

    /// Duration of one full self rotation of `body`.
    fn set_rotation_duration(&mut self, body: BodyId, duration: Num);

    /// Duration of one full turn of the ring carrying `body`.
    fn set_revolution_duration(&mut self, body: BodyId, duration: Num);

    fn set_paused(&mut self, paused: bool);

    /// Turns every ring back to phase zero.
    fn reset_ring_phases(&mut self);
}

/// A [`Renderer`] that only remembers the last value it was given.
///
/// Useful for headless runs and for inspecting what the registry assigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingRenderer {
    pub camera: Option<Vec3>,
    pub paused: bool,
    pub bodies: BTreeSet<BodyId>,
    /// Ring owner to ring center
    pub rings: BTreeMap<BodyId, BodyId>,
    pub sphere_radii: BTreeMap<BodyId, Num>,
    pub ring_radii: BTreeMap<BodyId, Num>,
    pub ring_phases: BTreeMap<BodyId, Num>,
    pub positions: BTreeMap<BodyId, Vec3>,
    pub scales: BTreeMap<BodyId, Num>,
    pub rotation_durations: BTreeMap<BodyId, Num>,
    pub revolution_durations: BTreeMap<BodyId, Num>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_camera(camera: Vec3) -> Self {
        Self {
            camera: Some(camera),
            ..Self::default()
        }
    }
}

impl Renderer for RecordingRenderer {
    fn camera_position(&self) -> Option<Vec3> {
        self.camera
    }

    fn ring_phase(&self, body: BodyId) -> Num {
        self.ring_phases.get(&body).copied().unwrap_or(0.0)
    }

    fn attach_body(&mut self, body: BodyId, sphere_radius: Num, position: Vec3) {
        self.bodies.insert(body);
        self.sphere_radii.insert(body, sphere_radius);
        self.positions.insert(body, position);
    }

    fn attach_ring(&mut self, body: BodyId, parent: BodyId, ring_radius: Num) {
        self.rings.insert(body, parent);
        self.ring_radii.insert(body, ring_radius);
        self.ring_phases.insert(body, 0.0);
    }

    fn detach(&mut self, body: BodyId) {
        self.bodies.remove(&body);
        self.rings.remove(&body);
        self.sphere_radii.remove(&body);
        self.ring_radii.remove(&body);
        self.ring_phases.remove(&body);
        self.positions.remove(&body);
        self.scales.remove(&body);
        self.rotation_durations.remove(&body);
        self.revolution_durations.remove(&body);
    }

    fn set_sphere_radius(&mut self, body: BodyId, radius: Num) {
        self.sphere_radii.insert(body, radius);
    }

    fn set_ring_radius(&mut self, body: BodyId, radius: Num) {
        self.ring_radii.insert(body, radius);
    }

    fn set_position(&mut self, body: BodyId, position: Vec3) {
        self.positions.insert(body, position);
    }

    fn set_scale(&mut self, body: BodyId, scale: Num) {
        self.scales.insert(body, scale);
    }

    fn set_rotation_duration(&mut self, body: BodyId, duration: Num) {
        self.rotation_durations.insert(body, duration);
    }

    fn set_revolution_duration(&mut self, body: BodyId, duration: Num) {
        self.revolution_durations.insert(body, duration);
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn reset_ring_phases(&mut self) {
        for phase in self.ring_phases.values_mut() {
            *phase = 0.0;
        }
    }
}
