//! Kruskal-Editor Library.
//! Graph-Editor mit Hit-Testing und schrittweisem Kruskal-Lauf,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AlgorithmRunner, AppCommand, AppController, AppIntent, AppMode, AppState, EditorMode,
    RunnerState, StepOutcome,
};
pub use core::{
    ComponentTracker, Edge, EdgeStatus, Graph, GraphError, HitTestConfig, KruskalEngine,
    Selectable, SpatialIndex, SpatialMatch, Usability, Vertex,
};
pub use shared::EditorOptions;
