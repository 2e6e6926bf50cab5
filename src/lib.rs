//! # PermitPro Demo
//!
//! Interactive permit discovery demo for your terminal.
//!
//! PermitPro walks a visitor through a scripted permit discovery flow over
//! hardcoded fixture data from the fictional "Demo City, ST": pick a demo
//! project, watch a short analysis animation, and browse the permits, fees,
//! inspections, and building codes the project would require.
//!
//! Everything is fictional. There is no server, no real permit data, and no
//! persistence - the entire result set is compiled into the binary.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the interactive demo
//! permitpro
//!
//! # Or inspect the fixture data directly
//! permitpro projects
//! permitpro show deck
//! permitpro codes fence --format json
//! ```

#![forbid(unsafe_code)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod core;
pub mod tui;

// Re-export commonly used types
pub use app::App;
pub use core::{
    CodeReference, Config, PermitRecord, ProjectCatalog, ProjectFixture, Screen, Session,
    SessionState, UnknownProjectType,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "permitpro";
