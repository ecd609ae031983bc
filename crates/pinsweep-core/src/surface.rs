//! Seam traits between the orchestrator and the target surface
//!
//! The orchestrator is generic over these two capabilities so the whole
//! check loop can be exercised with in-memory fakes. The browser crate
//! provides the CDP-backed implementations.

use async_trait::async_trait;

use crate::{AgentResponse, Result, SurfaceHandle};

/// Locates and validates the active target surface.
#[async_trait]
pub trait SurfaceBinder: Send + Sync {
    /// Find the active surface and confirm it is a recognized product page.
    ///
    /// Returns a fresh handle on every call. Callers must not reuse handles
    /// across queue steps; the surface may be closed or navigated away at
    /// any time.
    async fn validate_active_surface(&self) -> Result<SurfaceHandle>;

    /// Guarantee the page-agent capability exists on the surface,
    /// installing it if absent.
    async fn ensure_agent_present(&self, handle: &SurfaceHandle) -> Result<()>;
}

/// The in-surface automation capability: one check per call.
#[async_trait]
pub trait PageAgent: Send + Sync {
    /// Drive the delivery-check widget for one postal code and return the
    /// raw observed status text.
    async fn check_postal_code(
        &self,
        handle: &SurfaceHandle,
        postal_code: &str,
    ) -> Result<AgentResponse>;
}
