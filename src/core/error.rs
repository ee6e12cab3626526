//! Fehlertypen des Graph-Modells und der Kruskal-Engine.
//!
//! Alle Varianten sind Vorbedingungsverletzungen des Aufrufers (z.B. Zugriff auf
//! eine bereits entfernte Kante). Mutierende Operationen prüfen ihre
//! Vorbedingungen vollständig, bevor sie den Graphen verändern.

use thiserror::Error;

/// Ergebnis-Typ für Graph- und Engine-Operationen.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Fehler bei Graph-Mutationen und Algorithmus-Schritten.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex ist nicht (mehr) Teil des Graphen
    #[error("Vertex {0} existiert nicht")]
    UnknownVertex(u64),

    /// Kante ist nicht (mehr) Teil des Graphen
    #[error("Kante {0} existiert nicht")]
    UnknownEdge(u64),

    /// Self-Loop oder Kante passt nicht zum initialisierten Algorithmus-Zustand
    #[error("Ungültige Kante {edge}: {reason}")]
    InvalidEdge { edge: u64, reason: &'static str },

    /// Vertex ist kein Endpunkt der Kante
    #[error("Vertex {vertex} ist kein Endpunkt von Kante {edge}")]
    InvalidEndpoint { edge: u64, vertex: u64 },

    /// `u64::MAX` ist als Vertex-ID reserviert
    #[error("Vertex-ID {0} ist reserviert")]
    ReservedVertexId(u64),

    /// Alle Vertex-IDs vergeben
    #[error("Keine freie Vertex-ID mehr")]
    VertexIdsExhausted,

    /// Kruskal-Engine ohne Vertices initialisiert
    #[error("Graph enthält keine Vertices")]
    EmptyGraph,
}
