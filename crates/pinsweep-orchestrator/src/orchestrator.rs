//! The check orchestrator: run-start validation plus the sequential step loop
//!
//! Control flow for one run:
//!
//! ```text
//! start -> validate surface once -> build roster -> spawn step loop
//! loop:   re-validate surface -> ensure agent -> invoke agent -> classify
//!         -> record + emit per-item event -> fixed delay -> next
//! drain:  clear active flag -> emit completion event
//! ```
//!
//! The surface is re-validated before every step because the bound tab may
//! be closed or navigated away between steps; a stale handle is never
//! reused. A step failure of any kind becomes that item's `error` outcome
//! and the loop moves on. There is no retry and no early abort: a
//! permanently dead surface drains the rest of the queue as errors.

use pinsweep_core::{
    classify, LocationResult, Outcome, OutcomeKind, PageAgent, PinsweepError, Result, StartAck,
    StartRequest, SurfaceBinder, SweepConfig,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::events::{CheckEvent, EventChannel};
use crate::roster::build_roster;
use crate::run::Run;

/// Orchestrates sequential availability checks over one target surface.
///
/// Generic over the surface binder and page agent so the loop can be tested
/// with in-memory fakes.
pub struct CheckOrchestrator<B, A> {
    binder: Arc<B>,
    agent: Arc<A>,
    config: SweepConfig,
    events: EventChannel,
    /// At most one run process-wide; guards redundant starts
    active: Arc<AtomicBool>,
}

impl<B, A> CheckOrchestrator<B, A>
where
    B: SurfaceBinder + 'static,
    A: PageAgent + 'static,
{
    pub fn new(binder: B, agent: A, config: SweepConfig) -> Self {
        Self {
            binder: Arc::new(binder),
            agent: Arc::new(agent),
            config,
            events: EventChannel::default(),
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Subscribe to progress events. Subscribing is optional; with no
    /// subscriber events are dropped, never buffered indefinitely.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<CheckEvent> {
        self.events.subscribe()
    }

    /// Whether a run is currently in progress
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Start a run over the requested locations.
    ///
    /// Returns immediately after the run is created; the step loop finishes
    /// asynchronously. The acknowledgement always precedes any per-item
    /// event of the run. Run-start failures (already running, bad surface,
    /// empty roster) produce no `Run` and leave no residue.
    pub async fn start(&self, request: StartRequest) -> StartAck {
        if self
            .active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            // Existing run is untouched; no event for a redundant start
            return StartAck::error(PinsweepError::AlreadyRunning);
        }

        // Initial surface validation; the loop re-validates per step
        if let Err(e) = self.binder.validate_active_surface().await {
            warn!("Run start rejected, surface validation failed: {}", e);
            self.active.store(false, Ordering::SeqCst);
            self.events.emit(CheckEvent::CheckError {
                error: e.to_string(),
            });
            return StartAck::error(e);
        }

        let roster = build_roster(&request.locations, request.optional_custom.as_ref());
        if roster.is_empty() {
            self.active.store(false, Ordering::SeqCst);
            let status = "No valid locations specified.".to_string();
            self.events.emit(CheckEvent::CheckComplete {
                status: status.clone(),
            });
            return StartAck::message(status);
        }

        let run = Run::new(roster);
        info!(run_id = %run.id, "Starting check for {} locations", run.total());
        self.events.emit(CheckEvent::UpdateStatus {
            status: format!("Starting check for {} locations...", run.total()),
        });

        let binder = Arc::clone(&self.binder);
        let agent = Arc::clone(&self.agent);
        let events = self.events.clone();
        let config = self.config.clone();
        let active = Arc::clone(&self.active);
        tokio::spawn(async move {
            run_steps(run, binder, agent, events, config, active).await;
        });

        StartAck::initiated()
    }
}

/// The sequential step loop. Sole owner and sole mutator of the `Run`.
async fn run_steps<B, A>(
    mut run: Run,
    binder: Arc<B>,
    agent: Arc<A>,
    events: EventChannel,
    config: SweepConfig,
    active: Arc<AtomicBool>,
) where
    B: SurfaceBinder,
    A: PageAgent,
{
    let total = run.total();

    while let Some(location) = run.dequeue() {
        let position = run.processed() + 1;
        let progress = format!(
            "Checking {}/{}: {} ({})...",
            position, total, location.city, location.postal_code
        );
        debug!(run_id = %run.id, "{}", progress);

        match check_one(binder.as_ref(), agent.as_ref(), &location.postal_code).await {
            Ok(outcome) => {
                events.emit(CheckEvent::UpdateSingleStatus {
                    pincode: location.postal_code.clone(),
                    status: outcome.kind,
                    message: outcome.message.clone(),
                    update: progress,
                });
                run.record(LocationResult::new(location, outcome.kind, outcome.message));
            }
            Err(e) => {
                warn!(run_id = %run.id, "Check failed for {}: {}", location.postal_code, e);
                let message = e.to_string();
                events.emit(CheckEvent::UpdateSingleStatus {
                    pincode: location.postal_code.clone(),
                    status: OutcomeKind::Error,
                    message: message.clone(),
                    update: progress,
                });
                events.emit(CheckEvent::UpdateStatus {
                    status: format!("Error on {}, continuing...", location.postal_code),
                });
                run.record(LocationResult::new(location, OutcomeKind::Error, message));
            }
        }

        debug_assert!(run.is_balanced());

        if run.remaining() > 0 {
            tokio::time::sleep(Duration::from_millis(config.check_delay_ms)).await;
        }
    }

    active.store(false, Ordering::SeqCst);
    let errors = run
        .results()
        .iter()
        .filter(|r| r.outcome == OutcomeKind::Error)
        .count();
    let status = format!("Check complete. {} locations processed.", run.processed());
    info!(run_id = %run.id, errors, "{}", status);
    events.emit(CheckEvent::CheckComplete { status });
}

/// One queue step: re-validate, ensure the agent, invoke it, classify.
///
/// Every failure surfaces as an error the caller records for this item
/// only.
async fn check_one<B, A>(binder: &B, agent: &A, postal_code: &str) -> Result<Outcome>
where
    B: SurfaceBinder,
    A: PageAgent,
{
    let handle = binder.validate_active_surface().await?;
    binder.ensure_agent_present(&handle).await?;

    let response = agent.check_postal_code(&handle, postal_code).await?;
    if response.status.trim().is_empty() {
        return Err(PinsweepError::Transport(
            "Invalid response from page agent".to_string(),
        ));
    }

    Ok(classify(&response.status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pinsweep_core::{AgentResponse, Location, SurfaceHandle};
    use std::collections::HashMap;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::broadcast::Receiver;
    use tokio::sync::Semaphore;

    /// Binder that succeeds until a configured validation call, then fails
    struct FakeBinder {
        calls: AtomicUsize,
        /// 1-based call numbers that should fail validation
        fail_on: Vec<usize>,
    }

    impl FakeBinder {
        fn healthy() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_on: Vec::new(),
            }
        }

        fn failing_on(fail_on: Vec<usize>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_on,
            }
        }
    }

    #[async_trait]
    impl SurfaceBinder for FakeBinder {
        async fn validate_active_surface(&self) -> Result<SurfaceHandle> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_on.contains(&call) {
                return Err(PinsweepError::NotTargetSurface(
                    "tab navigated away".to_string(),
                ));
            }
            Ok(SurfaceHandle::new("tab-1", "https://www.flipkart.com/x/p/item"))
        }

        async fn ensure_agent_present(&self, _handle: &SurfaceHandle) -> Result<()> {
            Ok(())
        }
    }

    /// Agent that answers from a canned status map, gated by a semaphore
    struct FakeAgent {
        statuses: HashMap<String, String>,
        gate: Option<Arc<Semaphore>>,
    }

    impl FakeAgent {
        fn with_statuses(pairs: &[(&str, &str)]) -> Self {
            Self {
                statuses: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                gate: None,
            }
        }

        fn gated(pairs: &[(&str, &str)], gate: Arc<Semaphore>) -> Self {
            let mut agent = Self::with_statuses(pairs);
            agent.gate = Some(gate);
            agent
        }
    }

    #[async_trait]
    impl PageAgent for FakeAgent {
        async fn check_postal_code(
            &self,
            _handle: &SurfaceHandle,
            postal_code: &str,
        ) -> Result<AgentResponse> {
            if let Some(gate) = &self.gate {
                let permit = gate.acquire().await.map_err(|_| {
                    PinsweepError::Transport("gate closed".to_string())
                })?;
                permit.forget();
            }
            match self.statuses.get(postal_code) {
                Some(status) => Ok(AgentResponse {
                    postal_code: postal_code.to_string(),
                    status: status.clone(),
                }),
                None => Err(PinsweepError::Transport(
                    "Receiving end does not exist".to_string(),
                )),
            }
        }
    }

    fn fast_config() -> SweepConfig {
        SweepConfig {
            check_delay_ms: 0,
            ..SweepConfig::default()
        }
    }

    fn delhi() -> Location {
        Location::new("110001", "Delhi", "Delhi")
    }

    fn mumbai() -> Location {
        Location::new("400001", "Mumbai", "Maharashtra")
    }

    /// Drain events until the completion/error terminal event, inclusive
    async fn collect_run_events(rx: &mut Receiver<CheckEvent>) -> Vec<CheckEvent> {
        let mut events = Vec::new();
        loop {
            let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
                .await
                .expect("timed out waiting for events")
                .expect("channel closed");
            let terminal = matches!(
                event,
                CheckEvent::CheckComplete { .. } | CheckEvent::CheckError { .. }
            );
            events.push(event);
            if terminal {
                return events;
            }
        }
    }

    #[tokio::test]
    async fn test_two_location_scenario() {
        let agent = FakeAgent::with_statuses(&[
            ("110001", "Delivery by Monday"),
            ("400001", "Sold Out"),
        ]);
        let orchestrator = CheckOrchestrator::new(FakeBinder::healthy(), agent, fast_config());
        let mut rx = orchestrator.subscribe();

        let ack = orchestrator
            .start(StartRequest::new(vec![delhi(), mumbai()]))
            .await;
        assert_eq!(ack, StartAck::initiated());

        let events = collect_run_events(&mut rx).await;

        // Starting status, two per-item events in queue order, completion last
        assert!(matches!(&events[0], CheckEvent::UpdateStatus { status } if status == "Starting check for 2 locations..."));
        assert_eq!(
            events[1],
            CheckEvent::UpdateSingleStatus {
                pincode: "110001".to_string(),
                status: OutcomeKind::Available,
                message: "Delivery by Monday".to_string(),
                update: "Checking 1/2: Delhi (110001)...".to_string(),
            }
        );
        assert_eq!(
            events[2],
            CheckEvent::UpdateSingleStatus {
                pincode: "400001".to_string(),
                status: OutcomeKind::Unavailable,
                message: "Sold Out".to_string(),
                update: "Checking 2/2: Mumbai (400001)...".to_string(),
            }
        );
        assert!(matches!(&events[3], CheckEvent::CheckComplete { status } if status == "Check complete. 2 locations processed."));
        assert_eq!(events.len(), 4);

        assert!(!orchestrator.is_active());
    }

    #[tokio::test]
    async fn test_duplicate_pincodes_collapse_before_run() {
        let agent = FakeAgent::with_statuses(&[("110001", "Delivery by Monday")]);
        let orchestrator = CheckOrchestrator::new(FakeBinder::healthy(), agent, fast_config());
        let mut rx = orchestrator.subscribe();

        let duplicate = Location::new("110001", "New Delhi", "Delhi");
        orchestrator
            .start(StartRequest::new(vec![delhi(), duplicate]))
            .await;

        let events = collect_run_events(&mut rx).await;
        let per_item = events
            .iter()
            .filter(|e| matches!(e, CheckEvent::UpdateSingleStatus { .. }))
            .count();
        assert_eq!(per_item, 1);
        assert!(matches!(&events[0], CheckEvent::UpdateStatus { status } if status == "Starting check for 1 locations..."));
    }

    #[tokio::test]
    async fn test_second_start_rejected_while_active() {
        let gate = Arc::new(Semaphore::new(0));
        let agent = FakeAgent::gated(
            &[("110001", "Delivery by Monday"), ("400001", "Sold Out")],
            Arc::clone(&gate),
        );
        let orchestrator = CheckOrchestrator::new(FakeBinder::healthy(), agent, fast_config());
        let mut rx = orchestrator.subscribe();

        let ack = orchestrator
            .start(StartRequest::new(vec![delhi(), mumbai()]))
            .await;
        assert_eq!(ack, StartAck::initiated());
        assert!(orchestrator.is_active());

        // First run is parked on the gate; a redundant start must bounce
        // without disturbing it
        let ack = orchestrator.start(StartRequest::new(vec![delhi()])).await;
        assert!(ack.is_error());
        assert!(ack.status.contains("already in progress"));

        gate.add_permits(2);
        let events = collect_run_events(&mut rx).await;

        // Both items from the first run still completed
        let per_item = events
            .iter()
            .filter(|e| matches!(e, CheckEvent::UpdateSingleStatus { .. }))
            .count();
        assert_eq!(per_item, 2);
    }

    #[tokio::test]
    async fn test_empty_location_list_completes_without_run() {
        let agent = FakeAgent::with_statuses(&[]);
        let orchestrator = CheckOrchestrator::new(FakeBinder::healthy(), agent, fast_config());
        let mut rx = orchestrator.subscribe();

        let ack = orchestrator.start(StartRequest::new(Vec::new())).await;
        assert_eq!(ack.status, "No valid locations specified.");
        assert!(!ack.is_error());
        assert!(!orchestrator.is_active());

        let events = collect_run_events(&mut rx).await;
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], CheckEvent::CheckComplete { status } if status == "No valid locations specified."));
    }

    #[tokio::test]
    async fn test_all_invalid_locations_complete_without_run() {
        let agent = FakeAgent::with_statuses(&[]);
        let orchestrator = CheckOrchestrator::new(FakeBinder::healthy(), agent, fast_config());

        let incomplete = Location::new("110001", "", "Delhi");
        let ack = orchestrator.start(StartRequest::new(vec![incomplete])).await;
        assert_eq!(ack.status, "No valid locations specified.");
    }

    #[tokio::test]
    async fn test_start_fails_when_surface_invalid() {
        let binder = FakeBinder::failing_on(vec![1]);
        let agent = FakeAgent::with_statuses(&[]);
        let orchestrator = CheckOrchestrator::new(binder, agent, fast_config());
        let mut rx = orchestrator.subscribe();

        let ack = orchestrator.start(StartRequest::new(vec![delhi()])).await;
        assert!(ack.is_error());
        assert!(!orchestrator.is_active());

        let events = collect_run_events(&mut rx).await;
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], CheckEvent::CheckError { error } if error.contains("product page")));
    }

    #[tokio::test]
    async fn test_step_revalidation_failure_isolated_to_item() {
        // Call 1 is the start validation; call 2 is the first step's
        // re-validation. The first item errors, the second still runs.
        let binder = FakeBinder::failing_on(vec![2]);
        let agent = FakeAgent::with_statuses(&[
            ("110001", "Delivery by Monday"),
            ("400001", "Delivery by Tuesday"),
        ]);
        let orchestrator = CheckOrchestrator::new(binder, agent, fast_config());
        let mut rx = orchestrator.subscribe();

        orchestrator
            .start(StartRequest::new(vec![delhi(), mumbai()]))
            .await;
        let events = collect_run_events(&mut rx).await;

        let per_item: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                CheckEvent::UpdateSingleStatus {
                    pincode, status, ..
                } => Some((pincode.clone(), *status)),
                _ => None,
            })
            .collect();
        assert_eq!(
            per_item,
            vec![
                ("110001".to_string(), OutcomeKind::Error),
                ("400001".to_string(), OutcomeKind::Available),
            ]
        );

        // Per-item error also produces the continuing notice
        assert!(events.iter().any(|e| matches!(e, CheckEvent::UpdateStatus { status } if status == "Error on 110001, continuing...")));

        // Completion still reports both items processed
        assert!(matches!(events.last().unwrap(), CheckEvent::CheckComplete { status } if status == "Check complete. 2 locations processed."));
    }

    #[tokio::test]
    async fn test_agent_transport_failure_is_item_error() {
        // No canned status for Mumbai: the agent is unreachable for it
        let agent = FakeAgent::with_statuses(&[("110001", "Delivery by Monday")]);
        let orchestrator = CheckOrchestrator::new(FakeBinder::healthy(), agent, fast_config());
        let mut rx = orchestrator.subscribe();

        orchestrator
            .start(StartRequest::new(vec![delhi(), mumbai()]))
            .await;
        let events = collect_run_events(&mut rx).await;

        let mumbai_event = events
            .iter()
            .find(|e| matches!(e, CheckEvent::UpdateSingleStatus { pincode, .. } if pincode == "400001"))
            .unwrap();
        assert!(matches!(
            mumbai_event,
            CheckEvent::UpdateSingleStatus {
                status: OutcomeKind::Error,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_empty_agent_status_is_transport_error() {
        let agent = FakeAgent::with_statuses(&[("110001", "   ")]);
        let orchestrator = CheckOrchestrator::new(FakeBinder::healthy(), agent, fast_config());
        let mut rx = orchestrator.subscribe();

        orchestrator.start(StartRequest::new(vec![delhi()])).await;
        let events = collect_run_events(&mut rx).await;

        assert!(events.iter().any(|e| matches!(
            e,
            CheckEvent::UpdateSingleStatus {
                status: OutcomeKind::Error,
                ..
            }
        )));
    }

    #[tokio::test]
    async fn test_restart_allowed_after_completion() {
        let agent = FakeAgent::with_statuses(&[("110001", "Delivery by Monday")]);
        let orchestrator = CheckOrchestrator::new(FakeBinder::healthy(), agent, fast_config());
        let mut rx = orchestrator.subscribe();

        orchestrator.start(StartRequest::new(vec![delhi()])).await;
        collect_run_events(&mut rx).await;

        let ack = orchestrator.start(StartRequest::new(vec![delhi()])).await;
        assert_eq!(ack, StartAck::initiated());
        collect_run_events(&mut rx).await;
    }

    #[tokio::test]
    async fn test_custom_location_joins_the_run() {
        let agent = FakeAgent::with_statuses(&[
            ("110001", "Delivery by Monday"),
            ("560001", "Delivery in 3-5 days"),
        ]);
        let orchestrator = CheckOrchestrator::new(FakeBinder::healthy(), agent, fast_config());
        let mut rx = orchestrator.subscribe();

        let request = StartRequest::new(vec![delhi()])
            .with_custom(Location::new("560001", "Bengaluru", "Karnataka"));
        orchestrator.start(request).await;
        let events = collect_run_events(&mut rx).await;

        let per_item = events
            .iter()
            .filter(|e| matches!(e, CheckEvent::UpdateSingleStatus { .. }))
            .count();
        assert_eq!(per_item, 2);
    }
}
