//! Ownership of the body hierarchy and the edits the control panel makes to it.
//!
//! Every edit goes through [`Registry`], which updates the affected bodies and
//! then re-derives whatever the [`Renderer`] shows for them: sphere and ring
//! radii, positions, scale and animation durations. Rejected edits return an
//! [`Error`] and leave both the hierarchy and the renderer untouched.

use tracing::{debug, trace};

use crate::body::{CentralBody, OrbitingBody};
use crate::config::{Config, Preset};
use crate::error::{positive, Error, Precondition, Result};
use crate::math::{planar_distance, project_onto_plane, ring_position};
use crate::readout::Readout;
use crate::renderer::Renderer;
use crate::slider::SliderReadback;
use crate::{vec3, BodyId, Num, System, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    None,
    Central(BodyId),
    Orbiting(BodyId),
}

/// Where the playground is in its placement and selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoSystem,
    /// A surface to put the sun on has been found
    AwaitingSunPlacement,
    HasSun(Selection),
}

pub struct Registry<R> {
    renderer: R,
    config: Config,
    anchor: Option<Vec3>,
    system: Option<System>,
    selected: Option<BodyId>,
    scale: Num,
    speed: Num,
    paused: bool,
}

impl<R: Renderer> Registry<R> {
    pub fn new(renderer: R) -> Self {
        Self::with_config(renderer, Config::default())
    }

    pub fn with_config(renderer: R, config: Config) -> Self {
        Self {
            renderer,
            scale: config.initial_scale,
            speed: config.initial_speed,
            config,
            anchor: None,
            system: None,
            selected: None,
            paused: false,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn system(&self) -> Option<&System> {
        self.system.as_ref()
    }

    pub fn scale(&self) -> Num {
        self.scale
    }

    pub fn speed(&self) -> Num {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> Phase {
        match (&self.system, self.anchor) {
            (Some(system), _) => Phase::HasSun(match self.selected {
                Some(id) if id == system.central() => Selection::Central(id),
                Some(id) => Selection::Orbiting(id),
                None => Selection::None,
            }),
            (None, Some(_)) => Phase::AwaitingSunPlacement,
            (None, None) => Phase::NoSystem,
        }
    }

    fn active(&self) -> Result<&System> {
        self.system
            .as_ref()
            .ok_or(Error::PreconditionNotMet(Precondition::NoSystem))
    }

    fn active_mut(&mut self) -> Result<&mut System> {
        self.system
            .as_mut()
            .ok_or(Error::PreconditionNotMet(Precondition::NoSystem))
    }

    /// Records where the central body can be placed.
    ///
    /// A newer anchor replaces an older one until the sun is placed.
    pub fn detect_anchor(&mut self, position: Vec3) -> Result<()> {
        if self.system.is_some() {
            return logged("detect_anchor", Err(Precondition::SystemExists.into()));
        }

        self.anchor = Some(position);
        Ok(())
    }

    /// Places `central` on the current anchor and starts an empty system.
    pub fn create_system(&mut self, central: CentralBody) -> Result<BodyId> {
        logged("create_system", self.try_create_system(central))
    }

    fn try_create_system(&mut self, central: CentralBody) -> Result<BodyId> {
        if self.system.is_some() {
            return Err(Precondition::SystemExists.into());
        }
        let origin = self.anchor.ok_or(Precondition::NoPlacementAnchor)?;
        let central = CentralBody::new(central.mass, central.radius, central.rotation_period)?;

        let system = System::new(central, origin);
        let id = system.central();

        self.renderer.attach_body(id, central.radius, origin);
        self.renderer.set_scale(id, self.scale);
        animate(&system, &mut self.renderer, self.speed, id)?;

        self.system = Some(system);
        self.anchor = None;
        debug!("create_system: central body {id} at {origin}");

        Ok(id)
    }

    /// [`Registry::create_system`] with the configured sun preset.
    pub fn place_sun(&mut self) -> Result<BodyId> {
        let Preset {
            mass,
            radius,
            rotation_period,
        } = self.config.sun;

        self.create_system(CentralBody::new(mass, radius, rotation_period)?)
    }

    /// Appends a body orbiting `parent` at `distance`.
    ///
    /// Planets start on the far side of their ring, moons in front of their
    /// parent.
    pub fn add_orbiting_body(
        &mut self,
        parent: BodyId,
        radius: Num,
        mass: Num,
        rotation_period: Num,
        distance: Num,
        is_moon: bool,
    ) -> Result<BodyId> {
        let position = if is_moon {
            vec3(0.0, 0.0, distance)
        } else {
            ring_position(distance, 0.0)
        };
        let body = OrbitingBody::new(parent, mass, radius, distance, rotation_period, distance);

        logged(
            "add_orbiting_body",
            body.and_then(|body| self.insert(body, position)),
        )
    }

    /// Adds a planet around the central body, on the ring that passes
    /// below the camera.
    pub fn add_planet(&mut self) -> Result<BodyId> {
        logged("add_planet", self.try_add_planet())
    }

    fn try_add_planet(&mut self) -> Result<BodyId> {
        let system = self.active()?;
        let (parent, origin) = (system.central(), system.origin());
        let camera = self.renderer.camera_position().ok_or(Precondition::NoCamera)?;

        let position = project_onto_plane(camera, origin);
        let distance = positive("distance", planar_distance(origin, position))?;
        let Preset {
            mass,
            radius,
            rotation_period,
        } = self.config.planet;

        let body = OrbitingBody::new(parent, mass, radius, distance, rotation_period, distance)?;
        self.insert(body, position - origin)
    }

    /// Adds a moon around the selected body.
    pub fn add_moon(&mut self) -> Result<BodyId> {
        logged("add_moon", self.try_add_moon())
    }

    fn try_add_moon(&mut self) -> Result<BodyId> {
        self.active()?;
        let parent = self.selected.ok_or(Precondition::NoSelection)?;
        let distance = self.config.moon_distance;
        let Preset {
            mass,
            radius,
            rotation_period,
        } = self.config.moon;

        let body = OrbitingBody::new(parent, mass, radius, distance, rotation_period, distance)?;
        self.insert(body, vec3(0.0, 0.0, distance))
    }

    /// `position` is relative to the center of the new ring.
    fn insert(&mut self, body: OrbitingBody, position: Vec3) -> Result<BodyId> {
        let system = self.system.as_mut().ok_or(Precondition::NoSystem)?;
        let id = system.insert(body)?;

        self.renderer.attach_ring(id, body.parent, body.distance);
        self.renderer.attach_body(id, body.radius, position);
        self.renderer.set_scale(id, self.scale);
        animate(system, &mut self.renderer, self.speed, id)?;

        debug!(
            "insert: body {id} around {} at distance {}",
            body.parent, body.distance
        );
        Ok(id)
    }

    /// Removes `id` and everything orbiting it. Removing the central body
    /// tears down the whole system.
    ///
    /// Returns the removed ids.
    pub fn remove_body(&mut self, id: BodyId) -> Result<Vec<BodyId>> {
        logged("remove_body", self.try_remove_body(id))
    }

    fn try_remove_body(&mut self, id: BodyId) -> Result<Vec<BodyId>> {
        if id == self.active()?.central() {
            return Ok(self.reset());
        }

        let removed = self.active_mut()?.remove(id)?;
        for gone in &removed {
            self.renderer.detach(*gone);
        }
        if self.selected.is_some_and(|selected| removed.contains(&selected)) {
            self.selected = None;
        }

        debug!("remove_body: removed {removed:?}");
        Ok(removed)
    }

    pub fn remove_selected(&mut self) -> Result<Vec<BodyId>> {
        let selected = self
            .selected
            .ok_or(Error::PreconditionNotMet(Precondition::NoSelection));

        logged("remove_selected", selected).and_then(|id| self.remove_body(id))
    }

    /// Drops the system and returns to [`Phase::NoSystem`].
    ///
    /// The scale goes back to its initial value; the speed is kept.
    pub fn reset(&mut self) -> Vec<BodyId> {
        let removed: Vec<BodyId> = self
            .system
            .take()
            .map(|system| system.iter().map(|(id, _)| id).collect())
            .unwrap_or_default();

        for id in &removed {
            self.renderer.detach(*id);
        }

        self.anchor = None;
        self.selected = None;
        self.scale = self.config.initial_scale;

        debug!("reset: removed {} bodies", removed.len());
        removed
    }

    pub fn select(&mut self, id: BodyId) -> Result<Selection> {
        let result = self.active().and_then(|system| system.get(id).map(|_| ()));
        logged("select", result)?;

        self.selected = Some(id);
        Ok(match self.phase() {
            Phase::HasSun(selection) => selection,
            _ => Selection::None,
        })
    }

    pub fn unselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<BodyId> {
        self.selected
    }

    /// Stores the scale and applies it to every body right away.
    pub fn set_global_scale(&mut self, scale: Num) -> Result<()> {
        let scale = logged("set_global_scale", positive("scale", scale))?;
        self.scale = scale;

        if let Some(system) = &self.system {
            for (id, _) in system.iter() {
                self.renderer.set_scale(id, scale);
            }
        }

        debug!("set_global_scale: {scale}");
        Ok(())
    }

    /// Stores the speed multiplier. Durations pick it up on the next
    /// [`Registry::reapply_animations`].
    pub fn set_global_speed(&mut self, speed: Num) -> Result<()> {
        self.speed = logged("set_global_speed", positive("speed", speed))?;

        debug!("set_global_speed: {}", self.speed);
        Ok(())
    }

    pub fn set_scale_slider(&mut self, value: Num) -> Result<()> {
        let scale = logged("set_scale_slider", self.config.slider.normalize(value))?;
        self.set_global_scale(scale)
    }

    /// Maps the inverted speed slider and re-derives every animation.
    pub fn set_speed_slider(&mut self, value: Num) -> Result<()> {
        let speed = logged(
            "set_speed_slider",
            self.config.slider.speed_from_slider(value),
        )?;
        self.set_global_speed(speed)?;

        if self.system.is_some() {
            self.reapply_animations()?;
        }
        Ok(())
    }

    /// Re-derives the rotation and revolution durations of every body.
    pub fn reapply_animations(&mut self) -> Result<()> {
        let system = self
            .system
            .as_ref()
            .ok_or(Error::PreconditionNotMet(Precondition::NoSystem));
        let system = logged("reapply_animations", system)?;

        for (id, _) in system.iter() {
            animate(system, &mut self.renderer, self.speed, id)?;
        }
        Ok(())
    }

    /// Sets the mass to the slider value times the reference mass and
    /// re-derives the body and everything orbiting it.
    pub fn update_mass(&mut self, id: BodyId, value: Num) -> Result<Num> {
        logged("update_mass", self.try_update_mass(id, value))
    }

    fn try_update_mass(&mut self, id: BodyId, value: Num) -> Result<Num> {
        let value = self.config.slider.normalize(value)?;
        let system = self.system.as_mut().ok_or(Precondition::NoSystem)?;
        let body = system.get_mut(id)?;
        let mass = self.config.mass_reference(body.is_central()) * value;
        body.set_mass(mass)?;

        animate(system, &mut self.renderer, self.speed, id)?;
        for descendant in system.descendants(id) {
            animate(system, &mut self.renderer, self.speed, descendant)?;
        }

        debug!("update_mass: body {id} mass {mass}");
        Ok(mass)
    }

    /// Sets the radius to the slider value times the reference radius.
    pub fn update_radius(&mut self, id: BodyId, value: Num) -> Result<Num> {
        logged("update_radius", self.try_update_radius(id, value))
    }

    fn try_update_radius(&mut self, id: BodyId, value: Num) -> Result<Num> {
        let value = self.config.slider.normalize(value)?;
        let system = self.system.as_mut().ok_or(Precondition::NoSystem)?;
        let body = system.get_mut(id)?;
        let radius = self.config.radius_reference(body.is_central()) * value;
        body.set_radius(radius)?;

        self.renderer.set_sphere_radius(id, radius);

        debug!("update_radius: body {id} radius {radius}");
        Ok(radius)
    }

    /// Resizes the ring of an orbiting body to the slider value times its
    /// base distance, keeping the body at its current phase on the ring.
    pub fn update_distance(&mut self, id: BodyId, value: Num) -> Result<Num> {
        logged("update_distance", self.try_update_distance(id, value))
    }

    fn try_update_distance(&mut self, id: BodyId, value: Num) -> Result<Num> {
        let value = self.config.slider.normalize(value)?;
        let system = self.system.as_mut().ok_or(Precondition::NoSystem)?;
        let distance = system.orbiting_body(id)?.base_distance * value;
        system.get_mut(id)?.set_distance(id, distance)?;

        let phase = self.renderer.ring_phase(id);
        self.renderer.set_ring_radius(id, distance);
        self.renderer.set_position(id, ring_position(distance, phase));
        animate(system, &mut self.renderer, self.speed, id)?;

        debug!("update_distance: body {id} distance {distance}");
        Ok(distance)
    }

    pub fn readout(&self, id: BodyId) -> Result<Readout> {
        Readout::for_body(self.active()?, id)
    }

    pub fn selected_readout(&self) -> Result<Readout> {
        self.readout(self.selected.ok_or(Precondition::NoSelection)?)
    }

    /// Slider positions matching the current parameters of `id`.
    pub fn sliders(&self, id: BodyId) -> Result<SliderReadback> {
        let body = self.active()?.get(id)?;
        let central = body.is_central();

        Ok(SliderReadback {
            mass: body.mass() / self.config.mass_reference(central),
            radius: body.radius() / self.config.radius_reference(central),
            distance: body.as_orbiting().map(OrbitingBody::distance_ratio),
        })
    }

    pub fn selected_sliders(&self) -> Result<SliderReadback> {
        self.sliders(self.selected.ok_or(Precondition::NoSelection)?)
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.renderer.set_paused(self.paused);
        self.paused
    }

    /// Turns every ring back to its starting phase.
    pub fn reset_timers(&mut self) -> Result<()> {
        logged("reset_timers", self.active())?;
        self.renderer.reset_ring_phases();
        Ok(())
    }
}

/// Assigns the animation durations of a single body.
fn animate<R: Renderer>(system: &System, renderer: &mut R, speed: Num, id: BodyId) -> Result<()> {
    let body = system.get(id)?;
    let rotation = body.rotation_period() * speed;
    renderer.set_rotation_duration(id, rotation);

    if body.as_orbiting().is_some() {
        let revolution = system.revolution_period(id)? * speed;
        renderer.set_revolution_duration(id, revolution);
        trace!("animate: body {id} rotation {rotation} revolution {revolution}");
    } else {
        trace!("animate: body {id} rotation {rotation}");
    }

    Ok(())
}

fn logged<T>(operation: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        debug!("{operation}: rejected, {e}");
    }
    result
}
