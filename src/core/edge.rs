//! Repräsentiert eine gewichtete, ungerichtete Kante zwischen zwei Vertices.

use glam::Vec2;

use super::error::{GraphError, Result};
use super::geometry;

/// Klassifikation einer Kante während eines Kruskal-Laufs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeStatus {
    /// Noch nicht betrachtet (auch: kein Lauf aktiv)
    #[default]
    Unchecked,
    /// Wird im aktuellen Schritt geprüft
    Checking,
    /// Teil des Spannbaums
    Included,
    /// Verworfen (würde einen Zyklus bilden)
    Excluded,
}

/// Eine ungerichtete Kante mit Gewicht
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Eindeutige ID innerhalb des Graphen
    pub id: u64,
    /// Erster Endpunkt
    pub a: u64,
    /// Zweiter Endpunkt
    pub b: u64,
    /// Gewicht (nicht-negativ)
    pub weight: u32,
    /// Klassifikation im aktuellen Kruskal-Lauf
    pub status: EdgeStatus,
    /// Position von `a` (gecacht, wird vom Graph aktualisiert)
    pub start_pos: Vec2,
    /// Position von `b` (gecacht, wird vom Graph aktualisiert)
    pub end_pos: Vec2,
    /// Mittelpunkt der Kante (Anker für das Gewichts-Label)
    pub midpoint: Vec2,
}

impl Edge {
    /// Erstellt eine neue Kante.
    ///
    /// Self-Loops werden mit `InvalidEdge` abgelehnt. Die Registrierung in den
    /// Inzidenzlisten der Endpunkte übernimmt der Graph beim Einfügen.
    pub fn new(
        id: u64,
        a: u64,
        b: u64,
        weight: u32,
        start_pos: Vec2,
        end_pos: Vec2,
    ) -> Result<Self> {
        if a == b {
            return Err(GraphError::InvalidEdge {
                edge: id,
                reason: "Self-Loop",
            });
        }

        Ok(Self {
            id,
            a,
            b,
            weight,
            status: EdgeStatus::Unchecked,
            start_pos,
            end_pos,
            midpoint: (start_pos + end_pos) * 0.5,
        })
    }

    /// Aktualisiert die Geometrie auf Basis der Vertex-Positionen
    pub fn update_geometry(&mut self, start_pos: Vec2, end_pos: Vec2) {
        self.start_pos = start_pos;
        self.end_pos = end_pos;
        self.midpoint = (start_pos + end_pos) * 0.5;
    }

    /// Liefert den gegenüberliegenden Endpunkt.
    pub fn other_endpoint(&self, from: u64) -> Result<u64> {
        if from == self.a {
            Ok(self.b)
        } else if from == self.b {
            Ok(self.a)
        } else {
            Err(GraphError::InvalidEndpoint {
                edge: self.id,
                vertex: from,
            })
        }
    }

    /// Prüft, ob die Kante das ungeordnete Paar {a, b} verbindet
    pub fn connects(&self, a: u64, b: u64) -> bool {
        (self.a == a && self.b == b) || (self.a == b && self.b == a)
    }

    /// Gibt `true` zurück, wenn `vertex` einer der beiden Endpunkte ist
    pub fn touches(&self, vertex: u64) -> bool {
        self.a == vertex || self.b == vertex
    }

    /// Abstand eines Punktes zur Kanten-Strecke
    pub fn distance_to_point(&self, point: Vec2) -> f32 {
        geometry::segment_distance(point, self.start_pos, self.end_pos)
    }

    /// Abstand für die Selektion inkl. Label-Bereich.
    ///
    /// Liegt `point` im achsenparallelen Quadrat mit Halbkante `label_half_extent`
    /// um den Mittelpunkt, wird 0.0 gemeldet.
    pub fn distance_to_point_with_label(&self, point: Vec2, label_half_extent: Option<f32>) -> f32 {
        if let Some(half) = label_half_extent {
            let offset = (point - self.midpoint).abs();
            if offset.x <= half && offset.y <= half {
                return 0.0;
            }
        }
        self.distance_to_point(point)
    }

    /// Setzt das Gewicht
    pub fn set_weight(&mut self, weight: u32) {
        self.weight = weight;
    }
}
