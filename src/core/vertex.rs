//! Ein Knoten des Graphen mit 2D-Position.

use glam::Vec2;

use super::geometry;

/// Ein Vertex mit Identität und veränderbarer Position.
///
/// Inzidente Kanten werden nicht im Vertex gehalten, sondern in der
/// Registry des [`Graph`](super::Graph) (siehe `Graph::degree`).
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Eindeutige ID innerhalb des Graphen
    pub id: u64,
    /// Position in Bildschirm-/Welteinheiten
    pub position: Vec2,
}

impl Vertex {
    /// Erstellt einen neuen Vertex
    pub fn new(id: u64, position: Vec2) -> Self {
        Self { id, position }
    }

    /// Abstand des Vertex zum gegebenen Punkt
    pub fn distance_to(&self, point: Vec2) -> f32 {
        geometry::distance(self.position, point)
    }
}
