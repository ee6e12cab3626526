use glam::Vec2;

use crate::core::Selectable;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Die Zeiger-Intents werden abhängig vom aktuellen Modus interpretiert,
/// die direkten Intents wirken unabhängig davon.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    // === Zeiger & Tastatur ===
    /// Zeiger wurde bewegt
    PointerMoved { pos: Vec2 },
    /// Primärtaste gedrückt
    PrimaryPressed { pos: Vec2 },
    /// Primärtaste losgelassen
    PrimaryReleased { pos: Vec2 },
    /// Sekundärtaste gedrückt (Entfernen / Abbrechen)
    SecondaryPressed { pos: Vec2 },
    /// Mausrad um `steps` Rasten gedreht (positiv = hoch)
    WheelScrolled { pos: Vec2, steps: i32 },
    /// Bestätigungstaste (Leertaste)
    ConfirmRequested,
    /// Anwendung beenden
    ExitRequested,

    // === Direkte Editor-Operationen ===
    /// Element unter der Position als Hover setzen
    PointerSelect { pos: Vec2 },
    /// Vertex an Position anlegen
    CreateVertex { pos: Vec2 },
    /// Vertex an Position verschieben
    MoveVertex { vertex_id: u64, pos: Vec2 },
    /// Vertex (mit inzidenten Kanten) oder Kante entfernen
    RemoveElement { element: Selectable },
    /// Kante anlegen oder Gewicht der bestehenden Kante setzen
    CreateOrUpdateEdge { a: u64, b: u64, weight: u32 },
    /// Kantengewicht relativ ändern (Ergebnis ≥ 0)
    AdjustEdgeWeight { edge_id: u64, delta: i32 },

    // === Algorithmus ===
    /// Kruskal-Lauf starten (nur wenn der Graph nutzbar ist)
    StartAlgorithmRequested,
    /// Nächsten Halbschritt ausführen
    AdvanceAlgorithmStep,
    /// Abspielmodus aktivieren
    PlayAlgorithmRequested,
    /// Alle verbleibenden Schritte ausführen
    FinishAlgorithmRequested,
    /// Lauf verwerfen und zum Editor zurückkehren
    ReturnToEditorRequested,
}
