//! Zustandsautomat der Editor-Interaktion.

/// Interaktionsmodus im Editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Keine laufende Interaktion
    #[default]
    Free,
    /// Primärtaste auf einem Vertex gedrückt, noch keine Bewegung
    Clicking { vertex_id: u64 },
    /// Vertex folgt dem Zeiger
    Dragging { vertex_id: u64 },
    /// Neue Kante hängt an `from_id`, wartet auf Ziel-Vertex
    HoldingEdge { from_id: u64, weight: u32 },
}

impl EditorMode {
    /// Vertex, an dem der aktuelle Modus hängt
    pub fn anchored_vertex(&self) -> Option<u64> {
        match *self {
            EditorMode::Free => None,
            EditorMode::Clicking { vertex_id } | EditorMode::Dragging { vertex_id } => {
                Some(vertex_id)
            }
            EditorMode::HoldingEdge { from_id, .. } => Some(from_id),
        }
    }

    /// Gibt `true` zurück, wenn gerade eine Kante gezogen wird.
    pub fn is_holding_edge(&self) -> bool {
        matches!(self, EditorMode::HoldingEdge { .. })
    }
}
