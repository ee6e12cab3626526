//! Core-Domänentypen: Vertices, Kanten, Graph, Spatial-Index und Kruskal-Engine.

pub mod edge;
pub mod error;
pub mod geometry;
/// Der Graph als Container für alle Vertices und Kanten
///
/// Hält die Invarianten des einfachen Graphen:
/// - höchstens eine Kante je ungeordnetem Vertex-Paar
/// - Endpunkte jeder Kante sind Vertices des Graphen
/// - Entfernen eines Vertex entfernt alle inzidenten Kanten
pub mod graph;
pub mod kruskal;
pub mod spatial;
pub mod vertex;

pub use edge::{Edge, EdgeStatus};
pub use error::{GraphError, Result};
pub use graph::{Graph, HitTestConfig, Selectable, Usability};
pub use kruskal::{ComponentTracker, KruskalEngine};
pub use spatial::{SpatialIndex, SpatialMatch};
pub use vertex::Vertex;
