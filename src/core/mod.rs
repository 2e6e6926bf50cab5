//! Core types and functionality for the PermitPro demo.
//!
//! This module contains the fundamental pieces the TUI and CLI are built on:
//! the fixture catalog, the session state machine, and configuration.

mod config;
mod fixtures;
mod session;

pub use config::{Config, CustomColorsConfig, DemoConfig, UiConfig};
pub use fixtures::{
    CodeReference, PermitRecord, ProjectCatalog, ProjectFixture, UnknownProjectType,
};
pub use session::{Screen, Session, SessionState};
