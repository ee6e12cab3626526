//! Handler für Vertex/Kanten-Editing und den Editor-Modus.
//!
//! Während eines Algorithmus-Laufs ist der Graph gesperrt: mutierende
//! Commands werden mit einer Warnung verworfen.

use glam::Vec2;

use crate::app::state::{AppMode, EditorMode};
use crate::app::AppState;

/// Prüft die Graph-Sperre und warnt bei aktivem Lauf.
fn graph_locked(state: &AppState, action: &str) -> bool {
    if state.is_running_algorithm() {
        log::warn!("{} abgelehnt: Algorithmus läuft", action);
        return true;
    }
    false
}

/// Setzt den Modus zurück, wenn er an einem entfernten Vertex hing.
fn release_stale_mode(state: &mut AppState) {
    if let AppMode::Editor(mode) = state.mode {
        if let Some(vertex_id) = mode.anchored_vertex() {
            if !state.graph.contains_vertex(vertex_id) {
                log::debug!("Editor-Modus {:?} verworfen: Vertex {} entfernt", mode, vertex_id);
                state.mode = AppMode::Editor(EditorMode::Free);
            }
        }
    }
}

/// Wechselt den Editor-Modus.
pub fn set_editor_mode(state: &mut AppState, mode: EditorMode) {
    if graph_locked(state, "Moduswechsel") {
        return;
    }
    if let Some(vertex_id) = mode.anchored_vertex() {
        if !state.graph.contains_vertex(vertex_id) {
            log::warn!("Moduswechsel auf unbekannten Vertex {} ignoriert", vertex_id);
            state.mode = AppMode::Editor(EditorMode::Free);
            return;
        }
    }
    state.mode = AppMode::Editor(mode);
    log::debug!("Editor-Modus: {:?}", mode);
}

/// Fügt einen neuen Vertex an der übergebenen Position hinzu.
pub fn add_vertex(state: &mut AppState, pos: Vec2) -> anyhow::Result<()> {
    if graph_locked(state, "Vertex anlegen") {
        return Ok(());
    }
    let id = state.graph.create_vertex(pos)?;
    log::info!("Vertex {} angelegt bei ({:.1}, {:.1})", id, pos.x, pos.y);
    Ok(())
}

/// Verschiebt einen Vertex, inzidente Kanten folgen.
pub fn move_vertex(state: &mut AppState, vertex_id: u64, pos: Vec2) -> anyhow::Result<()> {
    if graph_locked(state, "Vertex verschieben") {
        return Ok(());
    }
    state.graph.move_vertex(vertex_id, pos)?;
    Ok(())
}

/// Entfernt einen Vertex samt inzidenter Kanten.
pub fn remove_vertex(state: &mut AppState, vertex_id: u64) -> anyhow::Result<()> {
    if graph_locked(state, "Vertex entfernen") {
        return Ok(());
    }
    let degree = state.graph.degree(vertex_id)?;
    state.graph.remove_vertex(vertex_id)?;
    release_stale_mode(state);
    state.selection.drop_stale(&state.graph);
    log::info!("Vertex {} entfernt ({} Kanten)", vertex_id, degree);
    Ok(())
}

/// Entfernt eine Kante.
pub fn remove_edge(state: &mut AppState, edge_id: u64) -> anyhow::Result<()> {
    if graph_locked(state, "Kante entfernen") {
        return Ok(());
    }
    let edge = state.graph.remove_edge(edge_id)?;
    state.selection.drop_stale(&state.graph);
    log::info!("Kante {} ({}–{}) entfernt", edge.id, edge.a, edge.b);
    Ok(())
}

/// Legt eine Kante an oder setzt das Gewicht der bestehenden Kante.
pub fn add_or_update_edge(state: &mut AppState, a: u64, b: u64, weight: u32) -> anyhow::Result<()> {
    if graph_locked(state, "Kante anlegen") {
        return Ok(());
    }
    let existed = state.graph.edge_between(a, b).is_some();
    match state.graph.add_edge(a, b, weight)? {
        None => log::debug!("Self-Loop an Vertex {} ignoriert", a),
        Some(edge_id) if existed => {
            log::info!("Kante {} ({}–{}) aktualisiert, Gewicht {}", edge_id, a, b, weight)
        }
        Some(edge_id) => log::info!("Kante {} ({}–{}) angelegt, Gewicht {}", edge_id, a, b, weight),
    }
    Ok(())
}

/// Ändert ein Kantengewicht relativ (Ergebnis ≥ 0).
pub fn adjust_edge_weight(state: &mut AppState, edge_id: u64, delta: i32) -> anyhow::Result<()> {
    if graph_locked(state, "Gewicht ändern") {
        return Ok(());
    }
    let weight = state.graph.adjust_edge_weight(edge_id, delta)?;
    log::debug!("Kante {}: Gewicht {}", edge_id, weight);
    Ok(())
}

/// Ändert das Gewicht der gerade gezogenen Kante (Ergebnis ≥ 0).
pub fn adjust_pending_weight(state: &mut AppState, delta: i32) {
    if let AppMode::Editor(EditorMode::HoldingEdge { weight, .. }) = &mut state.mode {
        *weight = weight.saturating_add_signed(delta);
        log::debug!("Neue Kante: Gewicht {}", weight);
    } else {
        log::debug!("Gewichtsänderung ohne gezogene Kante ignoriert");
    }
}
