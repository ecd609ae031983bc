//! Surface binding over the Chrome DevTools Protocol
//!
//! A "surface" is the browser tab showing the product page under check. The
//! binder never trusts a tab across steps: every validation call re-reads
//! the tab registry and the tab's current URL, and hands back a fresh
//! handle.

use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use pinsweep_core::{PinsweepError, Result, SurfaceBinder, SurfaceHandle, SweepConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::agent::{CdpPageAgent, AGENT_PROBE, AGENT_SCRIPT};

/// URL schemes the browser refuses to script
const PROTECTED_PREFIXES: &[&str] = &[
    "chrome://",
    "chrome-extension://",
    "devtools://",
    "edge://",
    "about:",
    "view-source:",
];

/// Configuration for binding to a browser surface
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Sweep timing and target-page recognition settings
    pub sweep: SweepConfig,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            sweep: SweepConfig::default(),
        }
    }
}

/// Active browser session bound to one target surface at a time
pub struct SurfaceSession {
    browser: Arc<Browser>,
    config: SurfaceConfig,
}

impl SurfaceSession {
    /// Launch a new browser instance
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(SurfaceConfig::default()).await
    }

    /// Launch browser with custom configuration
    pub async fn launch_with_config(config: SurfaceConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| PinsweepError::Other(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| PinsweepError::Other(format!("Failed to launch browser: {}", e)))?;

        info!("Browser launched successfully");

        Ok(Self {
            browser: Arc::new(browser),
            config,
        })
    }

    /// Connect to an existing browser instance
    ///
    /// # Arguments
    /// * `port` - Chrome DevTools Protocol port (typically 9222)
    pub async fn connect(port: u16, config: SurfaceConfig) -> Result<Self> {
        info!("Connecting to existing browser on port {}", port);

        let browser = Browser::connect(format!("http://127.0.0.1:{}", port))
            .map_err(|e| PinsweepError::Other(format!("Failed to connect to browser: {}", e)))?;

        info!("Connected to browser successfully");

        Ok(Self {
            browser: Arc::new(browser),
            config,
        })
    }

    /// Page agent driving the same browser
    pub fn page_agent(&self) -> CdpPageAgent {
        CdpPageAgent::new(Arc::clone(&self.browser))
    }

    /// Most recently opened tab.
    ///
    /// CDP exposes no "focused tab" notion across windows; the newest tab
    /// is the closest stand-in for the tab the user is working in.
    fn active_tab(&self) -> Result<Arc<Tab>> {
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|_| PinsweepError::Other("Tab registry lock poisoned".to_string()))?;
        tabs.last()
            .cloned()
            .ok_or_else(|| PinsweepError::NotTargetSurface("Could not find active tab".to_string()))
    }
}

#[async_trait]
impl SurfaceBinder for SurfaceSession {
    async fn validate_active_surface(&self) -> Result<SurfaceHandle> {
        let tab = self.active_tab()?;
        let url = tab.get_url();

        if !is_product_page_url(
            &url,
            &self.config.sweep.host_marker,
            &self.config.sweep.path_markers,
        ) {
            warn!("Validation fail: active tab is not a product page: {}", url);
            return Err(PinsweepError::NotTargetSurface(url));
        }

        debug!("Active tab validated: {}", url);
        Ok(SurfaceHandle::new(tab.get_target_id().clone(), url))
    }

    async fn ensure_agent_present(&self, handle: &SurfaceHandle) -> Result<()> {
        if is_protected_url(&handle.url) {
            return Err(PinsweepError::ProtectedSurface(handle.url.clone()));
        }

        let tab = resolve_tab(&self.browser, handle)?;

        // Cheap probe first; a failed probe just means we inject
        match tab.evaluate(AGENT_PROBE, false) {
            Ok(result) if result.value == Some(serde_json::Value::Bool(true)) => {
                debug!("Page agent already present on {}", handle.tab_id);
                return Ok(());
            }
            Ok(_) => {}
            Err(e) => {
                debug!("Agent probe failed, attempting injection: {}", e);
            }
        }

        info!("Injecting page agent into tab {}", handle.tab_id);
        tab.evaluate(AGENT_SCRIPT, false).map_err(|e| {
            let message = e.to_string();
            if message.contains("Cannot access") {
                PinsweepError::ProtectedSurface(handle.url.clone())
            } else {
                PinsweepError::Injection(message)
            }
        })?;

        // Let the page settle before the first invocation
        tokio::time::sleep(Duration::from_millis(self.config.sweep.inject_settle_ms)).await;
        Ok(())
    }
}

/// Look a handle's tab back up; a missing tab means it was closed or
/// replaced since validation.
pub(crate) fn resolve_tab(browser: &Browser, handle: &SurfaceHandle) -> Result<Arc<Tab>> {
    let tabs = browser
        .get_tabs()
        .lock()
        .map_err(|_| PinsweepError::Other("Tab registry lock poisoned".to_string()))?;
    tabs.iter()
        .find(|tab| tab.get_target_id() == &handle.tab_id)
        .cloned()
        .ok_or_else(|| {
            PinsweepError::Transport("Connection lost. Tab closed or navigated away?".to_string())
        })
}

/// A URL is a recognized product page when it contains the host marker and
/// at least one path marker.
pub fn is_product_page_url(url: &str, host_marker: &str, path_markers: &[String]) -> bool {
    let lower = url.to_lowercase();
    if !lower.contains(host_marker) {
        return false;
    }
    path_markers.iter().any(|marker| url.contains(marker.as_str()))
}

/// Internal/protected pages forbid script installation outright
pub fn is_protected_url(url: &str) -> bool {
    PROTECTED_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}
