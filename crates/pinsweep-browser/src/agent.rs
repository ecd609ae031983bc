//! The in-page agent: installation script and CDP-backed invocation
//!
//! The agent lives inside the page as `window.checkPincode`. It types a
//! pincode into the delivery widget, triggers the check, waits for the page
//! to react, and returns `{pincode, status}` where `status` is the raw text
//! it observed. Everything selector- and text-pattern-specific stays inside
//! the script; the Rust side only ships the pincode in and parses the JSON
//! out.

use async_trait::async_trait;
use headless_chrome::Browser;
use pinsweep_core::{AgentResponse, PageAgent, PinsweepError, Result, SurfaceHandle};
use std::sync::Arc;
use tracing::debug;

use crate::surface::resolve_tab;

/// Probe expression: is the agent installed on this page?
pub(crate) const AGENT_PROBE: &str = "typeof window.checkPincode === 'function'";

/// Installs `window.checkPincode` on the page. Idempotent.
pub(crate) const AGENT_SCRIPT: &str = r#"
(() => {
    if (typeof window.checkPincode === 'function') return;

    const sleep = (ms) => new Promise((resolve) => setTimeout(resolve, ms));

    const findPincodeInput = () => {
        const selectors = [
            'input[class*="_36yFo0"]',
            'input[placeholder*="Enter Delivery Pincode"]',
            'input[placeholder*="pincode"]',
        ];
        for (const selector of selectors) {
            try {
                const input = document.querySelector(selector);
                if (input) return input;
            } catch (e) {
                // Malformed selector on this page variant, try the next
            }
        }
        return null;
    };

    window.checkPincode = async (pincode) => {
        const input = findPincodeInput();
        if (!input) {
            return { pincode, status: 'Error: Pincode input field could not be located on the page.' };
        }

        if (input.disabled) {
            await sleep(1000);
            if (input.disabled) {
                return { pincode, status: 'Error: Pincode input is disabled' };
            }
        }

        try {
            input.focus();
            input.value = '';
            input.dispatchEvent(new Event('input', { bubbles: true, composed: true }));
            input.dispatchEvent(new Event('change', { bubbles: true, composed: true }));
            await sleep(100);
            input.value = pincode;
            input.dispatchEvent(new Event('input', { bubbles: true, composed: true }));
            input.dispatchEvent(new Event('change', { bubbles: true, composed: true }));
            await sleep(150);
        } catch (e) {
            return { pincode, status: 'Error: Failed to simulate pincode input' };
        }

        try {
            const button = input.nextElementSibling;
            if (button && button.tagName === 'BUTTON' && !button.disabled) {
                button.click();
            } else {
                // No usable button next to the input, fall back to Enter
                input.dispatchEvent(new KeyboardEvent('keydown', { key: 'Enter', code: 'Enter', keyCode: 13, which: 13, bubbles: true }));
                input.dispatchEvent(new KeyboardEvent('keyup', { key: 'Enter', code: 'Enter', keyCode: 13, which: 13, bubbles: true }));
            }
        } catch (e) {
            // The check may still have fired; let status reading decide
        }

        await sleep(3500);

        let status = 'Status Unknown';
        try {
            const container = input.closest('div[class*="_3XINqE"], div[class*="pincode-widget"]');
            const info = container
                ? container.querySelector('div[class*="_16myGU"], div[class*="delivery-message"]')
                : null;

            if (info && info.offsetParent !== null) {
                status = info.textContent.trim();
            } else {
                const nearby = container ? container.innerText : document.body.innerText.substring(0, 5000);
                if (nearby.includes('Currently out of stock') || nearby.includes('Sold Out')) {
                    status = 'Out of Stock';
                } else if (nearby.match(/Delivery by \w+/)) {
                    status = nearby.match(/Delivery by .*?(?=[<,.])/)[0];
                } else if (nearby.match(/Delivery in \d+-\d+ days/)) {
                    status = nearby.match(/Delivery in \d+-\d+ days/)[0].trim();
                } else if (nearby.includes('Enter Pincode') && input.value === pincode) {
                    status = "Status Unknown (Check failed or page didn't update)";
                } else if (nearby.toLowerCase().includes(pincode)) {
                    status = 'Available (Delivery date unclear)';
                }
            }
        } catch (e) {
            status = 'Error: Reading status failed';
        }

        return { pincode, status };
    };
})();
"#;

/// Page agent backed by CDP script evaluation
pub struct CdpPageAgent {
    browser: Arc<Browser>,
}

impl CdpPageAgent {
    pub(crate) fn new(browser: Arc<Browser>) -> Self {
        Self { browser }
    }
}

#[async_trait]
impl PageAgent for CdpPageAgent {
    async fn check_postal_code(
        &self,
        handle: &SurfaceHandle,
        postal_code: &str,
    ) -> Result<AgentResponse> {
        // The pincode lands inside a JS string literal; only digits may pass
        if postal_code.is_empty() || !postal_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(PinsweepError::Transport(format!(
                "Refusing non-numeric postal code: {:?}",
                postal_code
            )));
        }

        let tab = resolve_tab(&self.browser, handle)?;

        debug!("Invoking page agent for pincode {}", postal_code);
        let script = format!(
            "window.checkPincode(\"{}\").then((r) => JSON.stringify(r))",
            postal_code
        );
        let result = tab
            .evaluate(&script, true)
            .map_err(|e| PinsweepError::Transport(e.to_string()))?;

        let raw = result
            .value
            .as_ref()
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                PinsweepError::Transport("Invalid response from page agent".to_string())
            })?;

        let response: AgentResponse = serde_json::from_str(raw)
            .map_err(|e| PinsweepError::Transport(format!("Malformed agent response: {}", e)))?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_script_is_idempotent_guarded() {
        assert!(AGENT_SCRIPT.contains("if (typeof window.checkPincode === 'function') return;"));
    }

    #[test]
    fn test_agent_probe_matches_script_capability() {
        assert!(AGENT_SCRIPT.contains("window.checkPincode = async (pincode)"));
        assert!(AGENT_PROBE.contains("window.checkPincode"));
    }

    #[test]
    fn test_agent_response_parsing() {
        let raw = "{\"pincode\":\"110001\",\"status\":\"Delivery by Monday\"}";
        let response: AgentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.postal_code, "110001");
        assert_eq!(response.status, "Delivery by Monday");
    }
}
