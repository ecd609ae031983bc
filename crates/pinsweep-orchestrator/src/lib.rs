//! # pinsweep-orchestrator
//!
//! The sequential check-orchestration engine: a queue-driven loop that pushes
//! one location at a time through surface validation, agent injection, and a
//! page-agent round trip, classifies the observed status, and streams
//! progress events to whichever consumer is listening.
//!
//! Guarantees:
//!
//! - At most one run is active process-wide; a second start is rejected
//! - At most one check is in flight; steps never overlap
//! - Per-item failures are recorded as `error` outcomes and never abort the run
//! - Events are emitted in completion order, completion event strictly last

mod events;
mod orchestrator;
mod roster;
mod run;

pub use events::{CheckEvent, EventChannel, EVENT_BUFFER};
pub use orchestrator::CheckOrchestrator;
pub use roster::{build_roster, is_valid_pincode};
pub use run::Run;
