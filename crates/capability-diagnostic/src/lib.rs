//! Capability gaps and risk diagnostic engine with its configuration, telemetry and HTTP router.

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod telemetry;

pub use diagnostic::{evaluate, DiagnosticEngine, DiagnosticInput, DiagnosticResult};
