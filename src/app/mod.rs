//! Application-Layer: Controller, State, Events, Handler und Algorithmus-Runner.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod runner;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Graph, Modus, Hover).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use runner::{AlgorithmRunner, RunnerState, StepOutcome};
pub use state::{AppMode, AppState, EditorMode, SelectionState};
