//! Shared configuration library for the orbit carousel.
//!
//! This crate centralizes the base geometry defaults, responsive breakpoint
//! overrides, render profiles, config loading/validation, and the resolver
//! that turns a viewport size into the live [`Geometry`] consumed by the
//! position engine. The engine and the `orbitctl` binary both go through
//! these types so there is a single source of truth for defaults and
//! validation rules.

pub mod constants;
pub mod loader;
pub mod media;
pub mod models;
pub mod resolver;
pub mod validation;

pub use loader::{ConfigLoad, ConfigSource, error::ConfigLoadError};
pub use media::{MediaCondition, MediaConditionParseError, WidthClause};
pub use models::{
    Breakpoint, CarouselConfig, GeometryOverrides, RenderProfile,
    VisualCoefficients,
};
pub use resolver::{ConfigResolver, Geometry, MatchSource};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
