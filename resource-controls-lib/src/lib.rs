#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! This is an implementation detail of the resource-controls tool. Do not take a dependency on this crate
//! as it may change in incompatible ways without warning.

// Core library for resource-controls
//
// This library evaluates attribute-driven existence controls: it resolves named attributes,
// looks a resource up through a cloud provider, and reports whether the resource exists.
//
// # Module Organization
//
// - [`attributes`]: Attribute sources and typed attribute sets
// - [`query`]: Resource queries and provider clients
// - [`control`]: The existence control and its results
// - [`reports`]: Result output in console and JSON formats
// - [`config`]: Configuration file handling
// - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod attributes;
pub mod commands;
pub mod config;
pub mod control;
pub mod query;
pub mod reports;

pub use crate::commands::{Host, run};
