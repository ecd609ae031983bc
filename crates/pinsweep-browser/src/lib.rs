//! Browser-side implementations of the Pinsweep surface seam
//!
//! This crate binds the orchestrator to a real browser tab over the Chrome
//! DevTools Protocol (CDP):
//!
//! - [`surface::SurfaceSession`] locates the active tab, validates it is a
//!   recognized product page, and installs the page agent when absent
//! - [`agent::CdpPageAgent`] drives the injected `window.checkPincode`
//!   capability for one postal code at a time
//!
//! # Requirements
//!
//! - Chrome or Chromium installed, or an existing instance started with
//!   `chrome --remote-debugging-port=9222` to connect to

pub mod agent;
pub mod error;
pub mod surface;

pub use agent::CdpPageAgent;
pub use error::{BrowserError, Result};
pub use surface::{SurfaceConfig, SurfaceSession};
