//! Application State — zentrale Datenhaltung.

mod app_state;
mod editor;
mod selection;

pub use app_state::{AppMode, AppState};
pub use editor::EditorMode;
pub use selection::SelectionState;
