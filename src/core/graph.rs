//! Der zentrale Graph mit Vertices, Kanten, Inzidenz-Registry und Spatial-Index.

use glam::Vec2;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

use super::error::{GraphError, Result};
use super::{Edge, EdgeStatus, SpatialIndex, Vertex};

/// Nicht vergebbare Vertex-ID (hält den ID-Zähler überlauffrei)
const RESERVED_VERTEX_ID: u64 = u64::MAX;

fn check_vertex_id(id: u64) -> Result<()> {
    if id == RESERVED_VERTEX_ID {
        return Err(GraphError::ReservedVertexId(id));
    }
    Ok(())
}

/// Schwellwerte für das Hit-Testing, vom Aufrufer vorgegeben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTestConfig {
    /// Radius, innerhalb dessen ein Vertex einen Klick registriert
    pub vertex_hit_radius: f32,
    /// Abstand zur Kanten-Strecke, innerhalb dessen eine Kante einen Klick registriert
    pub edge_hit_width: f32,
    /// Optionaler Label-Bereich um den Kanten-Mittelpunkt (Halbkante des Quadrats)
    pub edge_label_half_extent: Option<f32>,
}

/// Ergebnis einer Selektionsabfrage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selectable {
    /// Getroffener Vertex
    Vertex(u64),
    /// Getroffene Kante
    Edge(u64),
}

/// Ob der Graph für einen Kruskal-Lauf geeignet ist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usability {
    /// Mindestens eine Kante, zusammenhängend
    Usable,
    /// Keine Kanten vorhanden
    NeedsEdge,
    /// Nicht zusammenhängend
    NotConnected,
}

impl Usability {
    /// Gibt `true` zurück, wenn der Algorithmus gestartet werden darf.
    pub fn is_usable(self) -> bool {
        matches!(self, Usability::Usable)
    }

    /// Begründung für die Statuszeile
    pub fn reason(self) -> &'static str {
        match self {
            Usability::Usable => "ready to run",
            Usability::NeedsEdge => "needs at least one edge",
            Usability::NotConnected => "must be connected",
        }
    }
}

/// Ungerichteter, gewichteter, einfacher Graph
#[derive(Debug, Clone)]
pub struct Graph {
    /// Alle Vertices in Einfügereihenfolge
    vertices: IndexMap<u64, Vertex>,
    /// Alle Kanten in Einfügereihenfolge
    edges: IndexMap<u64, Edge>,
    /// Inzidente Kanten je Vertex (Rückreferenzen, O(1)-Grad)
    incident: HashMap<u64, IndexSet<u64>>,
    /// Ungeordnetes Vertex-Paar (min, max) → Kanten-ID
    pairs: HashMap<(u64, u64), u64>,
    next_vertex_id: u64,
    next_edge_id: u64,
    /// Persistenter Spatial-Index für Vertex-Abfragen
    spatial_index: SpatialIndex,
}

fn pair_key(a: u64, b: u64) -> (u64, u64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Erstellt einen leeren Graphen
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            incident: HashMap::new(),
            pairs: HashMap::new(),
            next_vertex_id: 1,
            next_edge_id: 1,
            spatial_index: SpatialIndex::empty(),
        }
    }

    // ── Vertices ────────────────────────────────────────────────────

    /// Fügt einen Vertex hinzu (idempotent bezüglich der ID).
    ///
    /// `u64::MAX` ist reserviert und wird mit `ReservedVertexId` abgelehnt.
    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<u64> {
        let id = vertex.id;
        check_vertex_id(id)?;
        if self.insert_vertex(vertex) {
            self.rebuild_spatial_index();
        }
        Ok(id)
    }

    /// Fügt mehrere Vertices hinzu, der Spatial-Index wird einmal neu gebaut.
    ///
    /// Enthält die Menge eine reservierte ID, wird nichts eingefügt.
    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = Vertex>) -> Result<()> {
        let vertices: Vec<Vertex> = vertices.into_iter().collect();
        for vertex in &vertices {
            check_vertex_id(vertex.id)?;
        }

        let mut inserted = false;
        for vertex in vertices {
            inserted |= self.insert_vertex(vertex);
        }
        if inserted {
            self.rebuild_spatial_index();
        }
        Ok(())
    }

    fn insert_vertex(&mut self, vertex: Vertex) -> bool {
        let id = vertex.id;
        if self.vertices.contains_key(&id) {
            return false;
        }
        // id < u64::MAX, siehe check_vertex_id
        self.next_vertex_id = self.next_vertex_id.max(id + 1);
        self.incident.entry(id).or_default();
        self.vertices.insert(id, vertex);
        true
    }

    /// Erstellt einen neuen Vertex mit der nächsten freien ID
    pub fn create_vertex(&mut self, position: Vec2) -> Result<u64> {
        let id = self.next_vertex_id;
        if id == RESERVED_VERTEX_ID {
            return Err(GraphError::VertexIdsExhausted);
        }
        self.add_vertex(Vertex::new(id, position))
    }

    /// Verschiebt einen Vertex und aktualisiert die Geometrie inzidenter Kanten
    pub fn move_vertex(&mut self, vertex_id: u64, position: Vec2) -> Result<()> {
        let Some(vertex) = self.vertices.get_mut(&vertex_id) else {
            return Err(GraphError::UnknownVertex(vertex_id));
        };

        if vertex.position == position {
            return Ok(());
        }
        vertex.position = position;

        if let Some(edge_ids) = self.incident.get(&vertex_id) {
            for edge_id in edge_ids {
                let Some(edge) = self.edges.get_mut(edge_id) else {
                    continue;
                };
                let start = self.vertices.get(&edge.a).map(|v| v.position);
                let end = self.vertices.get(&edge.b).map(|v| v.position);
                if let (Some(s), Some(e)) = (start, end) {
                    edge.update_geometry(s, e);
                }
            }
        }

        self.rebuild_spatial_index();
        Ok(())
    }

    /// Entfernt einen Vertex inklusive aller inzidenten Kanten
    pub fn remove_vertex(&mut self, vertex_id: u64) -> Result<Vertex> {
        if !self.vertices.contains_key(&vertex_id) {
            return Err(GraphError::UnknownVertex(vertex_id));
        }

        let incident: Vec<u64> = self
            .incident
            .get(&vertex_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        for edge_id in incident {
            self.remove_edge(edge_id)?;
        }

        self.incident.remove(&vertex_id);
        let removed = self
            .vertices
            .shift_remove(&vertex_id)
            .ok_or(GraphError::UnknownVertex(vertex_id))?;
        self.rebuild_spatial_index();
        Ok(removed)
    }

    /// Grad eines Vertex (Anzahl inzidenter Kanten) — O(1)
    pub fn degree(&self, vertex_id: u64) -> Result<usize> {
        if !self.vertices.contains_key(&vertex_id) {
            return Err(GraphError::UnknownVertex(vertex_id));
        }
        Ok(self.incident.get(&vertex_id).map_or(0, IndexSet::len))
    }

    /// IDs der inzidenten Kanten eines Vertex
    pub fn incident_edges(&self, vertex_id: u64) -> Result<impl Iterator<Item = u64> + '_> {
        if !self.vertices.contains_key(&vertex_id) {
            return Err(GraphError::UnknownVertex(vertex_id));
        }
        Ok(self
            .incident
            .get(&vertex_id)
            .into_iter()
            .flat_map(|set| set.iter().copied()))
    }

    /// Liefert einen Vertex per ID
    pub fn vertex(&self, vertex_id: u64) -> Option<&Vertex> {
        self.vertices.get(&vertex_id)
    }

    /// Prüft, ob ein Vertex existiert
    pub fn contains_vertex(&self, vertex_id: u64) -> bool {
        self.vertices.contains_key(&vertex_id)
    }

    /// Iterator über alle Vertices (Einfügereihenfolge)
    pub fn vertices_iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Gibt die Anzahl der Vertices zurück
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ── Kanten ──────────────────────────────────────────────────────

    /// Fügt eine Kante hinzu oder aktualisiert das Gewicht einer bestehenden.
    ///
    /// - `UnknownVertex`, falls ein Endpunkt fehlt
    /// - `Ok(None)` bei `a == b` (kein Self-Loop, keine Änderung)
    /// - Existiert bereits eine Kante {a, b}, wird nur deren Gewicht gesetzt
    pub fn add_edge(&mut self, a: u64, b: u64, weight: u32) -> Result<Option<u64>> {
        let start_pos = self
            .vertices
            .get(&a)
            .map(|v| v.position)
            .ok_or(GraphError::UnknownVertex(a))?;
        let end_pos = self
            .vertices
            .get(&b)
            .map(|v| v.position)
            .ok_or(GraphError::UnknownVertex(b))?;

        if a == b {
            return Ok(None);
        }

        let key = pair_key(a, b);
        if let Some(&existing) = self.pairs.get(&key) {
            if let Some(edge) = self.edges.get_mut(&existing) {
                edge.set_weight(weight);
            }
            return Ok(Some(existing));
        }

        let id = self.next_edge_id;
        let edge = Edge::new(id, a, b, weight, start_pos, end_pos)?;
        self.next_edge_id += 1;

        self.incident.entry(a).or_default().insert(id);
        self.incident.entry(b).or_default().insert(id);
        self.pairs.insert(key, id);
        self.edges.insert(id, edge);
        Ok(Some(id))
    }

    /// Setzt das Gewicht einer bestehenden Kante
    pub fn modify_edge_weight(&mut self, edge_id: u64, weight: u32) -> Result<()> {
        let edge = self
            .edges
            .get_mut(&edge_id)
            .ok_or(GraphError::UnknownEdge(edge_id))?;
        edge.set_weight(weight);
        Ok(())
    }

    /// Verändert das Gewicht um `delta`, nach unten bei 0 begrenzt.
    ///
    /// Gibt das neue Gewicht zurück.
    pub fn adjust_edge_weight(&mut self, edge_id: u64, delta: i32) -> Result<u32> {
        let edge = self
            .edges
            .get_mut(&edge_id)
            .ok_or(GraphError::UnknownEdge(edge_id))?;
        let weight = edge.weight.saturating_add_signed(delta);
        edge.set_weight(weight);
        Ok(weight)
    }

    /// Entfernt eine Kante und deren Rückreferenzen
    pub fn remove_edge(&mut self, edge_id: u64) -> Result<Edge> {
        let edge = self
            .edges
            .shift_remove(&edge_id)
            .ok_or(GraphError::UnknownEdge(edge_id))?;

        for endpoint in [edge.a, edge.b] {
            if let Some(set) = self.incident.get_mut(&endpoint) {
                set.shift_remove(&edge_id);
            }
        }
        self.pairs.remove(&pair_key(edge.a, edge.b));
        Ok(edge)
    }

    /// Setzt die Kruskal-Klassifikation einer Kante
    pub fn set_edge_status(&mut self, edge_id: u64, status: EdgeStatus) -> Result<()> {
        let edge = self
            .edges
            .get_mut(&edge_id)
            .ok_or(GraphError::UnknownEdge(edge_id))?;
        edge.status = status;
        Ok(())
    }

    /// Setzt alle Kanten auf `Unchecked` zurück (Abbruch/Ende eines Laufs)
    pub fn reset_classification(&mut self) {
        for edge in self.edges.values_mut() {
            edge.status = EdgeStatus::Unchecked;
        }
    }

    /// Liefert eine Kante per ID
    pub fn edge(&self, edge_id: u64) -> Option<&Edge> {
        self.edges.get(&edge_id)
    }

    /// Findet die Kante zwischen zwei Vertices (ungeordnet) — O(1)
    pub fn edge_between(&self, a: u64, b: u64) -> Option<&Edge> {
        self.pairs
            .get(&pair_key(a, b))
            .and_then(|id| self.edges.get(id))
    }

    /// Iterator über alle Kanten (Einfügereihenfolge)
    pub fn edges_iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Gibt die Anzahl der Kanten zurück
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Alle Kanten aufsteigend nach Gewicht, bei Gleichstand nach ID
    pub fn sorted_edges(&self) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.edges.values().collect();
        edges.sort_by_key(|e| (e.weight, e.id));
        edges
    }

    // ── Abfragen ────────────────────────────────────────────────────

    /// Findet das Element unter dem Zeiger.
    ///
    /// Vertices haben Vorrang vor Kanten. Innerhalb einer Klasse gewinnt die
    /// kleinste Distanz, bei Gleichstand die kleinste ID.
    pub fn nearest_selectable(&self, point: Vec2, config: &HitTestConfig) -> Option<Selectable> {
        if let Some(vertex_id) = self.nearest_vertex(point, config.vertex_hit_radius) {
            return Some(Selectable::Vertex(vertex_id));
        }

        self.edges
            .values()
            .map(|e| {
                (
                    e.distance_to_point_with_label(point, config.edge_label_half_extent),
                    e.id,
                )
            })
            .filter(|(distance, _)| *distance <= config.edge_hit_width)
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(_, id)| Selectable::Edge(id))
    }

    /// Findet den nächsten Vertex innerhalb von `radius`
    pub fn nearest_vertex(&self, point: Vec2, radius: f32) -> Option<u64> {
        self.spatial_index
            .within_radius(point, radius)
            .first()
            .map(|hit| hit.vertex_id)
    }

    /// Prüft per Tiefensuche (expliziter Stack), ob alle Vertices erreichbar sind
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.vertices.keys().next() else {
            return true;
        };
        if self.vertices.len() == 1 {
            return true;
        }

        let mut visited: IndexSet<u64> = IndexSet::with_capacity(self.vertices.len());
        let mut stack = vec![start];
        visited.insert(start);

        while let Some(current) = stack.pop() {
            let Some(edge_ids) = self.incident.get(&current) else {
                continue;
            };
            for edge_id in edge_ids {
                let Some(edge) = self.edges.get(edge_id) else {
                    continue;
                };
                if let Ok(next) = edge.other_endpoint(current) {
                    if visited.insert(next) {
                        stack.push(next);
                    }
                }
            }
        }

        visited.len() == self.vertices.len()
    }

    /// Ob der Graph für einen Kruskal-Lauf geeignet ist
    pub fn usability(&self) -> Usability {
        if self.edges.is_empty() {
            Usability::NeedsEdge
        } else if !self.is_connected() {
            Usability::NotConnected
        } else {
            Usability::Usable
        }
    }

    /// Summe der Gewichte aller als `Included` klassifizierten Kanten
    pub fn spanning_weight(&self) -> u64 {
        self.edges
            .values()
            .filter(|e| e.status == EdgeStatus::Included)
            .map(|e| u64::from(e.weight))
            .sum()
    }

    /// Baut den persistenten Spatial-Index aus den aktuellen Vertices neu auf.
    pub fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_vertices(&self.vertices);
    }
}
