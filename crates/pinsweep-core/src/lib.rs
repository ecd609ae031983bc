//! # pinsweep-core
//!
//! Core types for the Pinsweep delivery-availability sweeper.
//!
//! Pinsweep drives the delivery-check widget of a product page through a list
//! of postal codes, one at a time, and classifies the status text the page
//! reports for each one.
//!
//! ## Core Paradigm
//!
//! - A sweep processes exactly one surface (page/tab) and one location at a time
//! - The surface is never trusted across steps; it is re-validated before each
//! - Per-item failures are recorded as outcomes, never aborts
//! - Status classification is a pure function over the observed text

mod classifier;
mod config;
mod error;
mod surface;
mod types;

pub use classifier::{classify, Outcome};
pub use config::SweepConfig;
pub use error::{PinsweepError, Result};
pub use surface::{PageAgent, SurfaceBinder};
pub use types::*;
