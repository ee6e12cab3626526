//! Spatial-Index (KD-Tree) für schnelle Vertex-Abfragen beim Hit-Testing.

use glam::Vec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};
use std::collections::HashMap;

use super::Vertex;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Vertex
    pub vertex_id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Vertices eines Graphen.
///
/// Jede unterschiedliche Position steht genau einmal im Baum; deckungsgleiche
/// Vertices teilen sich einen Eintrag. kiddos Leaf-Buckets können nicht mehr
/// als ihre Bucket-Größe an identischen Punkten aufnehmen.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    /// Vertex-IDs je Baum-Eintrag, aufsteigend sortiert
    groups: Vec<Vec<u64>>,
    vertex_count: usize,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            groups: Vec::new(),
            vertex_count: 0,
        }
    }

    /// Baut einen neuen Index aus den übergebenen Vertices.
    pub fn from_vertices(vertices: &IndexMap<u64, Vertex>) -> Self {
        let mut vertex_ids: Vec<u64> = vertices.keys().copied().collect();
        vertex_ids.sort_unstable();

        let mut slots: HashMap<(u64, u64), usize> = HashMap::new();
        let mut entries: Vec<[f64; 2]> = Vec::new();
        let mut groups: Vec<Vec<u64>> = Vec::new();

        for id in &vertex_ids {
            let Some(vertex) = vertices.get(id) else {
                continue;
            };
            let point = [vertex.position.x as f64, vertex.position.y as f64];
            let slot = *slots.entry(position_key(point)).or_insert_with(|| {
                entries.push(point);
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(*id);
        }

        Self {
            tree: (&entries).into(),
            groups,
            vertex_count: vertex_ids.len(),
        }
    }

    /// Gibt die Anzahl indexierter Vertices zurück.
    pub fn len(&self) -> usize {
        self.vertex_count
    }

    /// Gibt `true` zurück, wenn keine Vertices im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Findet alle Vertices innerhalb eines Radius um die Query-Position.
    ///
    /// Sortiert nach Distanz, bei Gleichstand nach kleinster ID.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let radius_sq = (radius as f64) * (radius as f64);
        let mut results = Vec::new();
        for entry in self
            .tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], radius_sq)
        {
            let Some(group) = self.groups.get(entry.item as usize) else {
                continue;
            };
            let distance = (entry.distance as f32).sqrt();
            results.extend(group.iter().map(|&vertex_id| SpatialMatch {
                vertex_id,
                distance,
            }));
        }

        results.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.vertex_id.cmp(&b.vertex_id))
        });
        results
    }
}

/// Bitmuster-Schlüssel einer Position; `-0.0` fällt mit `0.0` zusammen.
fn position_key(point: [f64; 2]) -> (u64, u64) {
    ((point[0] + 0.0).to_bits(), (point[1] + 0.0).to_bits())
}
