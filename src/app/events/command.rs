use glam::Vec2;

use crate::app::state::EditorMode;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Hover anhand der Zeigerposition neu bestimmen
    UpdateHover { pos: Vec2 },
    /// Editor-Modus wechseln
    SetEditorMode { mode: EditorMode },
    /// Neuen Vertex an Position anlegen
    AddVertex { pos: Vec2 },
    /// Vertex verschieben
    MoveVertex { vertex_id: u64, pos: Vec2 },
    /// Vertex samt inzidenten Kanten entfernen
    RemoveVertex { vertex_id: u64 },
    /// Kante entfernen
    RemoveEdge { edge_id: u64 },
    /// Kante anlegen oder Gewicht aktualisieren
    AddOrUpdateEdge { a: u64, b: u64, weight: u32 },
    /// Kantengewicht relativ ändern
    AdjustEdgeWeight { edge_id: u64, delta: i32 },
    /// Gewicht der gerade gezogenen Kante relativ ändern
    AdjustPendingWeight { delta: i32 },
    /// Kruskal-Lauf starten
    StartAlgorithm,
    /// Nächsten Halbschritt ausführen
    StepAlgorithm,
    /// Abspielmodus aktivieren
    PlayAlgorithm,
    /// Alle verbleibenden Schritte ausführen
    FinishAlgorithm,
    /// Lauf verwerfen, Klassifikation zurücksetzen
    ReturnToEditor,
    /// Anwendung beenden
    RequestExit,
}
