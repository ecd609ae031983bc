//! Browser error types - re-exports the unified PinsweepError from pinsweep-core
//!
//! Surface and agent failures map onto the core taxonomy:
//! - NotTargetSurface - no active tab, wrong site, or not a product page
//! - ProtectedSurface - injection refused on internal/protected pages
//! - Injection - any other installation failure
//! - Transport - tab gone mid-call or malformed agent response

pub use pinsweep_core::{PinsweepError, Result};

// Type alias kept for call sites that only deal with browser failures
pub type BrowserError = PinsweepError;
