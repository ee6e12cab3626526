use glam::Vec2;

use crate::core::{Graph, Selectable};

/// Hover-Zustand unter dem Zeiger
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Element unter dem Zeiger (Vertex hat Vorrang vor Kante)
    pub hovered: Option<Selectable>,
    /// Letzte bekannte Zeigerposition
    pub pointer_pos: Vec2,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft den Hover, falls das Element nicht mehr im Graphen existiert.
    pub fn drop_stale(&mut self, graph: &Graph) {
        let alive = match self.hovered {
            Some(Selectable::Vertex(id)) => graph.contains_vertex(id),
            Some(Selectable::Edge(id)) => graph.edge(id).is_some(),
            None => true,
        };
        if !alive {
            self.hovered = None;
        }
    }
}
