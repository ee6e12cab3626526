//! Handler für den Hover unter dem Zeiger.

use glam::Vec2;

use crate::app::state::{AppMode, EditorMode};
use crate::app::AppState;
use crate::core::Selectable;

/// Bestimmt das Element unter `pos` neu.
///
/// Beim Ziehen einer Kante kommen nur Vertices als Ziel in Frage.
/// Während eines Algorithmus-Laufs gibt es keinen Hover.
pub fn update_hover(state: &mut AppState, pos: Vec2) {
    state.selection.pointer_pos = pos;

    let hovered = match &state.mode {
        AppMode::Editor(EditorMode::HoldingEdge { .. }) => state
            .graph
            .nearest_vertex(pos, state.options.vertex_hit_radius)
            .map(Selectable::Vertex),
        AppMode::Editor(_) => state
            .graph
            .nearest_selectable(pos, &state.options.hit_test_config()),
        AppMode::Algorithm(_) => None,
    };

    if hovered != state.selection.hovered {
        log::debug!("Hover: {:?}", hovered);
        state.selection.hovered = hovered;
    }
}
