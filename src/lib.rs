//! Body model, derived physics and orbit-state bookkeeping for a small
//! sun/planet/moon playground.
//!
//! The [`Body`] type holds the physical parameters of a single body and
//! exposes the derived quantities (escape velocity, surface gravity,
//! revolution period, ...) as pure functions. The [`Registry`] owns the
//! hierarchy of bodies and keeps the presentation layer (anything
//! implementing [`Renderer`]) in sync with every edit.

pub mod arena;
pub mod astro;
pub mod body;
pub mod config;
pub mod constants;
pub mod error;
pub mod math;
pub mod readout;
pub mod registry;
pub mod renderer;
pub mod slider;
pub mod system;

pub use self::arena::BodyId;
pub use self::body::{Body, CentralBody, OrbitingBody};
pub use self::config::Config;
pub use self::constants::*;
pub use self::error::{Error, Precondition, Result};
pub use self::readout::{Formula, Readout};
pub use self::registry::{Phase, Registry, Selection};
pub use self::renderer::{RecordingRenderer, Renderer};
pub use self::slider::{SliderRange, SliderReadback};
pub use self::system::System;

pub type Num = f64;
pub type Vec3 = glam::DVec3;

pub use glam::dvec3 as vec3;
