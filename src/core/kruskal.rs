//! Inkrementelle Kruskal-Engine: Komponenten-Tracking und Kanten-Klassifikation.
//!
//! Die Engine hält nur die Partition der Vertices. Die Kanten-Klassifikation
//! wird direkt am Graphen gesetzt, damit die Darstellung sie abfragen kann.

use std::collections::HashMap;

use super::error::{GraphError, Result};
use super::{EdgeStatus, Graph};

/// Disjunkte Komponenten (Union-Find) über Vertex-IDs.
///
/// Pfadkompression + Union-by-Size. Beobachtbar ist nur, ob zwei Vertices in
/// derselben Komponente liegen, nicht welcher Repräsentant gewählt wurde.
#[derive(Debug, Clone, Default)]
pub struct ComponentTracker {
    parent: HashMap<u64, u64>,
    size: HashMap<u64, usize>,
    components: usize,
}

impl ComponentTracker {
    /// Erstellt je Vertex eine Einzel-Komponente.
    pub fn with_singletons(vertex_ids: impl IntoIterator<Item = u64>) -> Self {
        let mut tracker = Self::default();
        for id in vertex_ids {
            if tracker.parent.insert(id, id).is_none() {
                tracker.size.insert(id, 1);
                tracker.components += 1;
            }
        }
        tracker
    }

    /// Prüft, ob der Vertex verfolgt wird
    pub fn contains(&self, vertex_id: u64) -> bool {
        self.parent.contains_key(&vertex_id)
    }

    /// Repräsentant der Komponente von `vertex_id`
    pub fn find(&mut self, vertex_id: u64) -> Option<u64> {
        let mut root = *self.parent.get(&vertex_id)?;
        while let Some(&next) = self.parent.get(&root) {
            if next == root {
                break;
            }
            root = next;
        }

        let mut node = vertex_id;
        while node != root {
            let Some(next) = self.parent.insert(node, root) else {
                break;
            };
            node = next;
        }

        Some(root)
    }

    /// Vereinigt die Komponenten von `a` und `b`.
    ///
    /// Gibt `false` zurück, wenn beide bereits in derselben Komponente liegen.
    pub fn union(&mut self, a: u64, b: u64) -> Option<bool> {
        let mut root_a = self.find(a)?;
        let mut root_b = self.find(b)?;
        if root_a == root_b {
            return Some(false);
        }

        let size_a = self.size.get(&root_a).copied().unwrap_or(1);
        let size_b = self.size.get(&root_b).copied().unwrap_or(1);
        if size_a < size_b {
            std::mem::swap(&mut root_a, &mut root_b);
        }

        self.parent.insert(root_b, root_a);
        self.size.insert(root_a, size_a + size_b);
        self.size.remove(&root_b);
        self.components -= 1;
        Some(true)
    }

    /// Anzahl disjunkter Komponenten
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Alle Komponenten als sortierte ID-Listen (sortiert nach kleinster ID)
    pub fn components(&mut self) -> Vec<Vec<u64>> {
        let ids: Vec<u64> = self.parent.keys().copied().collect();
        let mut groups: HashMap<u64, Vec<u64>> = HashMap::new();
        for id in ids {
            if let Some(root) = self.find(id) {
                groups.entry(root).or_default().push(id);
            }
        }

        let mut result: Vec<Vec<u64>> = groups
            .into_values()
            .map(|mut group| {
                group.sort_unstable();
                group
            })
            .collect();
        result.sort_unstable_by_key(|group| group.first().copied());
        result
    }
}

/// Zustand eines Kruskal-Laufs.
///
/// Kanten werden extern in aufsteigender Gewichtsreihenfolge
/// ([`Graph::sorted_edges`]) über [`KruskalEngine::check_edge`] zugeführt.
#[derive(Debug, Clone)]
pub struct KruskalEngine {
    tracker: ComponentTracker,
}

impl KruskalEngine {
    /// Initialisiert die Engine mit Einzel-Komponenten für alle aktuellen Vertices.
    pub fn initialize(graph: &Graph) -> Result<Self> {
        if graph.vertex_count() == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let tracker = ComponentTracker::with_singletons(graph.vertices_iter().map(|v| v.id));
        log::debug!(
            "Kruskal initialisiert: {} Komponenten",
            tracker.component_count()
        );
        Ok(Self { tracker })
    }

    /// Klassifiziert eine Kante.
    ///
    /// Liegen beide Endpunkte in derselben Komponente, wird die Kante
    /// `Excluded` (Zyklus), sonst `Included` und die Komponenten werden vereinigt.
    /// Bereits klassifizierte Kanten bleiben unverändert.
    pub fn check_edge(&mut self, graph: &mut Graph, edge_id: u64) -> Result<EdgeStatus> {
        let edge = graph.edge(edge_id).ok_or(GraphError::UnknownEdge(edge_id))?;
        let (a, b) = (edge.a, edge.b);

        if matches!(edge.status, EdgeStatus::Included | EdgeStatus::Excluded) {
            log::debug!("Kante {} bereits klassifiziert: {:?}", edge_id, edge.status);
            return Ok(edge.status);
        }

        if !self.tracker.contains(a) || !self.tracker.contains(b) {
            return Err(GraphError::InvalidEdge {
                edge: edge_id,
                reason: "Endpunkt gehört nicht zum initialisierten Graphen",
            });
        }

        let merged = self.tracker.union(a, b).unwrap_or(false);
        let status = if merged {
            EdgeStatus::Included
        } else {
            EdgeStatus::Excluded
        };
        graph.set_edge_status(edge_id, status)?;

        log::debug!(
            "Kante {} ({}–{}) → {:?}, {} Komponenten",
            edge_id,
            a,
            b,
            status,
            self.tracker.component_count()
        );
        Ok(status)
    }

    /// Anzahl der aktuellen Komponenten
    pub fn component_count(&self) -> usize {
        self.tracker.component_count()
    }

    /// Prüft, ob zwei Vertices derzeit in derselben Komponente liegen
    pub fn same_component(&mut self, a: u64, b: u64) -> bool {
        match (self.tracker.find(a), self.tracker.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// Aktuelle Partition der Vertices
    pub fn components(&mut self) -> Vec<Vec<u64>> {
        self.tracker.components()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn triangle() -> (Graph, [u64; 3], [u64; 3]) {
        let mut graph = Graph::new();
        let v1 = graph.create_vertex(Vec2::new(0.0, 0.0)).unwrap();
        let v2 = graph.create_vertex(Vec2::new(100.0, 0.0)).unwrap();
        let v3 = graph.create_vertex(Vec2::new(50.0, 80.0)).unwrap();
        let e12 = graph.add_edge(v1, v2, 1).unwrap().unwrap();
        let e23 = graph.add_edge(v2, v3, 2).unwrap().unwrap();
        let e13 = graph.add_edge(v1, v3, 3).unwrap().unwrap();
        (graph, [v1, v2, v3], [e12, e23, e13])
    }

    fn run_to_end(graph: &mut Graph) -> KruskalEngine {
        let mut engine = KruskalEngine::initialize(graph).expect("Engine erwartet");
        let order: Vec<u64> = graph.sorted_edges().iter().map(|e| e.id).collect();
        for edge_id in order {
            engine.check_edge(graph, edge_id).expect("Schritt erwartet");
        }
        engine
    }

    #[test]
    fn triangle_includes_two_lightest_edges() {
        let (mut graph, _, [e12, e23, e13]) = triangle();
        let mut engine = KruskalEngine::initialize(&graph).unwrap();
        assert_eq!(engine.component_count(), 3);

        assert_eq!(engine.check_edge(&mut graph, e12), Ok(EdgeStatus::Included));
        assert_eq!(engine.check_edge(&mut graph, e23), Ok(EdgeStatus::Included));
        assert_eq!(engine.check_edge(&mut graph, e13), Ok(EdgeStatus::Excluded));

        assert_eq!(engine.component_count(), 1);
        assert_eq!(graph.spanning_weight(), 3);
    }

    #[test]
    fn empty_graph_cannot_be_initialized() {
        let graph = Graph::new();
        assert!(matches!(
            KruskalEngine::initialize(&graph),
            Err(GraphError::EmptyGraph)
        ));
    }

    #[test]
    fn edge_added_after_initialize_is_invalid() {
        let (mut graph, [v1, _, _], _) = triangle();
        let mut engine = KruskalEngine::initialize(&graph).unwrap();

        let late = graph.create_vertex(Vec2::new(300.0, 300.0)).unwrap();
        let late_edge = graph.add_edge(v1, late, 1).unwrap().unwrap();

        assert!(matches!(
            engine.check_edge(&mut graph, late_edge),
            Err(GraphError::InvalidEdge { .. })
        ));
        assert_eq!(
            engine.check_edge(&mut graph, 999),
            Err(GraphError::UnknownEdge(999))
        );
        assert_eq!(engine.component_count(), 3);
    }

    #[test]
    fn components_partition_all_vertices() {
        let (mut graph, [v1, v2, v3], [e12, _, _]) = triangle();
        let extra = graph.create_vertex(Vec2::new(400.0, 0.0)).unwrap();
        let mut engine = KruskalEngine::initialize(&graph).unwrap();

        engine.check_edge(&mut graph, e12).unwrap();

        let components = engine.components();
        assert_eq!(components, vec![vec![v1, v2], vec![v3], vec![extra]]);
        assert!(engine.same_component(v1, v2));
        assert!(!engine.same_component(v2, v3));
    }

    #[test]
    fn disconnected_graph_yields_spanning_forest() {
        let mut graph = Graph::new();
        let a = graph.create_vertex(Vec2::new(0.0, 0.0)).unwrap();
        let b = graph.create_vertex(Vec2::new(10.0, 0.0)).unwrap();
        let c = graph.create_vertex(Vec2::new(100.0, 0.0)).unwrap();
        let d = graph.create_vertex(Vec2::new(110.0, 0.0)).unwrap();
        graph.add_edge(a, b, 4).unwrap();
        graph.add_edge(c, d, 6).unwrap();

        let engine = run_to_end(&mut graph);
        assert_eq!(engine.component_count(), 2);
        assert_eq!(graph.spanning_weight(), 10);
    }

    #[test]
    fn square_with_diagonals_matches_known_mst_weight() {
        // Quadrat a-b-c-d mit Diagonalen, MST-Gewicht 1 + 2 + 3 = 6
        let mut graph = Graph::new();
        let a = graph.create_vertex(Vec2::new(0.0, 0.0)).unwrap();
        let b = graph.create_vertex(Vec2::new(10.0, 0.0)).unwrap();
        let c = graph.create_vertex(Vec2::new(10.0, 10.0)).unwrap();
        let d = graph.create_vertex(Vec2::new(0.0, 10.0)).unwrap();
        graph.add_edge(a, b, 1).unwrap();
        graph.add_edge(b, c, 4).unwrap();
        graph.add_edge(c, d, 3).unwrap();
        graph.add_edge(d, a, 5).unwrap();
        graph.add_edge(a, c, 2).unwrap();
        graph.add_edge(b, d, 7).unwrap();

        let engine = run_to_end(&mut graph);
        assert_eq!(engine.component_count(), 1);
        assert_eq!(graph.spanning_weight(), 6);

        let included = graph
            .edges_iter()
            .filter(|e| e.status == EdgeStatus::Included)
            .count();
        assert_eq!(included, graph.vertex_count() - 1);
    }

    #[test]
    fn tracker_union_reports_cycle() {
        let mut tracker = ComponentTracker::with_singletons([1, 2, 3, 3]);
        assert_eq!(tracker.component_count(), 3);
        assert_eq!(tracker.union(1, 2), Some(true));
        assert_eq!(tracker.union(2, 1), Some(false));
        assert_eq!(tracker.union(1, 42), None);
        assert_eq!(tracker.component_count(), 2);
    }

    #[test]
    fn repeated_check_keeps_classification() {
        let (mut graph, _, [e12, e23, e13]) = triangle();
        let mut engine = KruskalEngine::initialize(&graph).unwrap();

        assert_eq!(engine.check_edge(&mut graph, e12), Ok(EdgeStatus::Included));
        assert_eq!(engine.check_edge(&mut graph, e12), Ok(EdgeStatus::Included));
        assert_eq!(graph.spanning_weight(), 1);
        assert_eq!(engine.component_count(), 2);

        engine.check_edge(&mut graph, e23).unwrap();
        assert_eq!(engine.check_edge(&mut graph, e13), Ok(EdgeStatus::Excluded));
        assert_eq!(engine.check_edge(&mut graph, e13), Ok(EdgeStatus::Excluded));
        assert_eq!(graph.spanning_weight(), 3);
    }
}
