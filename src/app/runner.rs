//! Schrittweise Ausführung von Kruskals Algorithmus über einem fertigen Graphen.
//!
//! Jeder Kanten-Schritt besteht aus zwei Phasen: zuerst wird die nächste Kante
//! als `Checking` markiert, beim folgenden Schritt wird sie klassifiziert.
//! Der Runner besitzt den Graphen nicht, sondern bekommt ihn pro Schritt geliehen.

use crate::core::{EdgeStatus, Graph, KruskalEngine, Result};

/// Zustand des Algorithmus-Runners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunnerState {
    /// Schritte werden einzeln angefordert
    #[default]
    Stepping,
    /// Schritte werden vom Host-Takt automatisch angefordert
    Playing,
    /// Alle Kanten klassifiziert
    Done,
}

/// Ergebnis eines einzelnen Schritts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Kante wurde als `Checking` markiert
    Marked { edge_id: u64 },
    /// Kante wurde klassifiziert
    Classified { edge_id: u64, status: EdgeStatus },
    /// Nichts mehr zu tun
    Finished,
}

/// Führt einen Kruskal-Lauf Kante für Kante aus.
#[derive(Debug, Clone)]
pub struct AlgorithmRunner {
    engine: KruskalEngine,
    edge_order: Vec<u64>,
    next_index: usize,
    checking: bool,
    state: RunnerState,
}

impl AlgorithmRunner {
    /// Startet einen Lauf: Kanten-Reihenfolge und Komponenten werden eingefroren.
    pub fn new(graph: &Graph) -> Result<Self> {
        let engine = KruskalEngine::initialize(graph)?;
        let edge_order: Vec<u64> = graph.sorted_edges().iter().map(|e| e.id).collect();
        let state = if edge_order.is_empty() {
            RunnerState::Done
        } else {
            RunnerState::Stepping
        };

        log::info!(
            "Kruskal-Lauf gestartet: {} Vertices, {} Kanten",
            graph.vertex_count(),
            edge_order.len()
        );

        Ok(Self {
            engine,
            edge_order,
            next_index: 0,
            checking: false,
            state,
        })
    }

    /// Führt den nächsten Halbschritt aus (markieren oder klassifizieren).
    pub fn next_step(&mut self, graph: &mut Graph) -> Result<StepOutcome> {
        if self.state == RunnerState::Done {
            return Ok(StepOutcome::Finished);
        }

        let Some(&edge_id) = self.edge_order.get(self.next_index) else {
            self.state = RunnerState::Done;
            return Ok(StepOutcome::Finished);
        };

        if !self.checking {
            graph.set_edge_status(edge_id, EdgeStatus::Checking)?;
            self.checking = true;
            return Ok(StepOutcome::Marked { edge_id });
        }

        let status = self.engine.check_edge(graph, edge_id)?;
        self.checking = false;
        self.next_index += 1;

        if self.next_index == self.edge_order.len() {
            self.state = RunnerState::Done;
            log::info!(
                "Kruskal-Lauf beendet, Gesamtgewicht {}",
                graph.spanning_weight()
            );
        }

        Ok(StepOutcome::Classified { edge_id, status })
    }

    /// Wechselt von Einzelschritten in den Abspielmodus.
    pub fn play(&mut self) {
        if self.state == RunnerState::Stepping {
            self.state = RunnerState::Playing;
            log::debug!("Runner: Abspielmodus");
        }
    }

    /// Führt alle verbleibenden Schritte aus.
    pub fn finish(&mut self, graph: &mut Graph) -> Result<()> {
        while self.state != RunnerState::Done {
            self.next_step(graph)?;
        }
        Ok(())
    }

    /// Bricht den Lauf ab und setzt alle Klassifikationen zurück.
    pub fn abandon(self, graph: &mut Graph) {
        graph.reset_classification();
        log::debug!(
            "Runner verworfen nach {}/{} Kanten",
            self.next_index,
            self.edge_order.len()
        );
    }

    /// Aktueller Zustand
    pub fn state(&self) -> RunnerState {
        self.state
    }

    /// Gibt `true` zurück, wenn alle Kanten klassifiziert sind.
    pub fn is_done(&self) -> bool {
        self.state == RunnerState::Done
    }

    /// Kante, die gerade als `Checking` markiert ist
    pub fn current_edge(&self) -> Option<u64> {
        if self.checking {
            self.edge_order.get(self.next_index).copied()
        } else {
            None
        }
    }

    /// (klassifizierte Kanten, Kanten gesamt)
    pub fn progress(&self) -> (usize, usize) {
        (self.next_index, self.edge_order.len())
    }

    /// Anzahl der aktuellen Komponenten
    pub fn component_count(&self) -> usize {
        self.engine.component_count()
    }
}
