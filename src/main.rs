//! Kruskal-Editor (headless).
//!
//! Baut einen Beispielgraphen über dieselben Zeiger-Intents auf, die eine
//! Oberfläche senden würde, und spielt anschließend Kruskals Algorithmus ab.

use glam::Vec2;
use kruskal_editor::{AppController, AppIntent, AppState, EditorOptions, RunnerState};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Kruskal-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    run().inspect_err(|e| log::error!("Abbruch: {:#}", e))
}

fn run() -> anyhow::Result<()> {
    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    build_demo_graph(&mut controller, &mut state)?;
    log::info!("{}", state.status_message());

    controller.handle_intent(&mut state, AppIntent::ConfirmRequested)?;
    if !state.is_running_algorithm() {
        anyhow::bail!("Beispielgraph ist nicht nutzbar: {}", state.status_message());
    }
    log::info!("{}", state.status_message());

    // Abspielmodus: der Host-Takt fordert Schritte an, bis der Lauf fertig ist
    controller.handle_intent(&mut state, AppIntent::ConfirmRequested)?;
    while state
        .runner()
        .is_some_and(|runner| runner.state() == RunnerState::Playing)
    {
        controller.handle_intent(&mut state, AppIntent::AdvanceAlgorithmStep)?;
    }

    log::info!("{}", state.status_message());
    log::info!(
        "{} Commands ausgeführt, Gesamtgewicht {}",
        state.command_log.total(),
        state.graph.spanning_weight()
    );

    controller.handle_intent(&mut state, AppIntent::PrimaryPressed { pos: Vec2::ZERO })?;
    Ok(())
}

/// Fünf Vertices im Kreis, verbunden per Klick-Loslassen-Klick, Gewicht per Mausrad.
fn build_demo_graph(controller: &mut AppController, state: &mut AppState) -> anyhow::Result<()> {
    let positions: Vec<Vec2> = (0..5)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / 5.0;
            Vec2::new(200.0 + 150.0 * angle.cos(), 200.0 + 150.0 * angle.sin())
        })
        .collect();

    for &pos in &positions {
        controller.handle_intent(state, AppIntent::PrimaryPressed { pos })?;
    }

    let edges = [(0, 1, 4), (1, 2, 2), (2, 3, 5), (3, 4, 1), (4, 0, 3), (0, 2, 6), (1, 3, 2)];
    for (from, to, weight) in edges {
        let from_pos = positions[from];
        controller.handle_intent(state, AppIntent::PrimaryPressed { pos: from_pos })?;
        controller.handle_intent(state, AppIntent::PrimaryReleased { pos: from_pos })?;
        controller.handle_intent(
            state,
            AppIntent::WheelScrolled {
                pos: from_pos,
                steps: weight,
            },
        )?;
        controller.handle_intent(state, AppIntent::PrimaryPressed { pos: positions[to] })?;
    }

    log::info!(
        "Beispielgraph: {} Vertices, {} Kanten",
        state.vertex_count(),
        state.edge_count()
    );
    Ok(())
}
