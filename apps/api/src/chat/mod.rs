//! Dialogue core: intent classification, history, reply generation, and the
//! per-request orchestration state machine.

pub mod history;
pub mod intent;
pub mod lookups;
pub mod orchestrator;
pub mod replies;
pub mod responder;
