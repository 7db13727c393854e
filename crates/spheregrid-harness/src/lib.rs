#![forbid(unsafe_code)]

//! Headless host and scenario driver for SphereGrid.
//!
//! [`HeadlessHost`] implements every collaborator trait by recording state in
//! plain vectors, with an orthographic camera centred on the viewport. It is
//! the reference fake for integration tests and backs the
//! `spheregrid-harness` binary.

pub mod cli;
mod host;
mod scenario;

pub use host::{ControlRecord, HeadlessHost, ItemRecord};
pub use scenario::{HarnessError, Scenario, Summary, build_grid};
