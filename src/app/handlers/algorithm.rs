//! Handler für den Kruskal-Lauf.

use anyhow::Context;

use crate::app::runner::{AlgorithmRunner, StepOutcome};
use crate::app::state::AppMode;
use crate::app::AppState;

/// Startet einen Lauf, sofern der Graph nutzbar ist.
pub fn start(state: &mut AppState) -> anyhow::Result<()> {
    if state.is_running_algorithm() {
        log::debug!("Algorithmus läuft bereits");
        return Ok(());
    }

    let usability = state.graph.usability();
    if !usability.is_usable() {
        log::warn!("Algorithmus nicht gestartet: Graph {}", usability.reason());
        return Ok(());
    }

    let runner = AlgorithmRunner::new(&state.graph).context("Kruskal-Lauf konnte nicht starten")?;
    state.mode = AppMode::Algorithm(runner);
    state.selection.hovered = None;
    Ok(())
}

/// Führt den nächsten Halbschritt aus.
pub fn step(state: &mut AppState) -> anyhow::Result<()> {
    let AppMode::Algorithm(runner) = &mut state.mode else {
        log::debug!("Schritt ohne aktiven Lauf ignoriert");
        return Ok(());
    };

    match runner.next_step(&mut state.graph)? {
        StepOutcome::Marked { edge_id } => log::debug!("Prüfe Kante {}", edge_id),
        StepOutcome::Classified { edge_id, status } => {
            let (done, total) = runner.progress();
            log::info!("Kante {} → {:?} ({}/{})", edge_id, status, done, total);
        }
        StepOutcome::Finished => log::debug!("Lauf bereits beendet"),
    }
    Ok(())
}

/// Aktiviert den Abspielmodus.
pub fn play(state: &mut AppState) {
    if let AppMode::Algorithm(runner) = &mut state.mode {
        runner.play();
    } else {
        log::debug!("Abspielen ohne aktiven Lauf ignoriert");
    }
}

/// Führt alle verbleibenden Schritte aus.
pub fn finish(state: &mut AppState) -> anyhow::Result<()> {
    if let AppMode::Algorithm(runner) = &mut state.mode {
        runner.finish(&mut state.graph)?;
    } else {
        log::debug!("Beenden ohne aktiven Lauf ignoriert");
    }
    Ok(())
}

/// Verwirft den Lauf und kehrt in den Editor zurück.
pub fn return_to_editor(state: &mut AppState) {
    match std::mem::take(&mut state.mode) {
        AppMode::Algorithm(runner) => {
            runner.abandon(&mut state.graph);
            log::info!("Zurück im Editor");
        }
        editor => state.mode = editor,
    }
}
