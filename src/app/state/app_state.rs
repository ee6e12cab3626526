use crate::app::runner::{AlgorithmRunner, RunnerState};
use crate::app::CommandLog;
use crate::core::{Graph, Usability};
use crate::shared::EditorOptions;

use super::{EditorMode, SelectionState};

/// Oberster Anwendungsmodus: Graph bearbeiten oder Algorithmus abspielen
#[derive(Debug, Clone)]
pub enum AppMode {
    /// Graph wird bearbeitet
    Editor(EditorMode),
    /// Kruskal-Lauf aktiv, der Graph ist gesperrt
    Algorithm(AlgorithmRunner),
}

impl Default for AppMode {
    fn default() -> Self {
        AppMode::Editor(EditorMode::Free)
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Der bearbeitete Graph (einziger Besitzer)
    pub graph: Graph,
    /// Aktueller Modus
    pub mode: AppMode,
    /// Hover-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Hit-Radien, Gewichte)
    pub options: EditorOptions,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Graphen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit vorgegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            graph: Graph::new(),
            mode: AppMode::default(),
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Editor-Modus, falls kein Algorithmus läuft
    pub fn editor_mode(&self) -> Option<EditorMode> {
        match &self.mode {
            AppMode::Editor(mode) => Some(*mode),
            AppMode::Algorithm(_) => None,
        }
    }

    /// Aktiver Runner, falls ein Algorithmus läuft
    pub fn runner(&self) -> Option<&AlgorithmRunner> {
        match &self.mode {
            AppMode::Algorithm(runner) => Some(runner),
            AppMode::Editor(_) => None,
        }
    }

    /// Gibt `true` zurück, solange ein Kruskal-Lauf aktiv ist.
    pub fn is_running_algorithm(&self) -> bool {
        matches!(self.mode, AppMode::Algorithm(_))
    }

    /// Gibt die Anzahl der Vertices zurück (für UI-Anzeige)
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Gibt die Anzahl der Kanten zurück (für UI-Anzeige)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Statuszeile für den aktuellen Modus
    pub fn status_message(&self) -> String {
        match &self.mode {
            AppMode::Editor(_) => match self.graph.usability() {
                Usability::Usable => {
                    "Press [SPACE] to run Kruskal's algorithm.".to_string()
                }
                other => format!("Graph {}.", other.reason()),
            },
            AppMode::Algorithm(runner) => match runner.state() {
                RunnerState::Stepping => {
                    "Click anywhere to step through the algorithm, or press [SPACE] to play it."
                        .to_string()
                }
                RunnerState::Playing => {
                    let (done, total) = runner.progress();
                    format!("Playing... {}/{} edges checked.", done, total)
                }
                RunnerState::Done => format!(
                    "Finished! Total weight is {}. Click anywhere to return to the editor.",
                    self.graph.spanning_weight()
                ),
            },
        }
    }
}
