//! Integrationstests für den Zeiger-Zustandsautomaten und den Kruskal-Lauf
//! über `AppController::handle_intent`.

use glam::Vec2;
use kruskal_editor::{
    AppCommand, AppController, AppIntent, AppMode, AppState, EdgeStatus, EditorMode, RunnerState,
    Selectable,
};

const V1: Vec2 = Vec2::new(0.0, 0.0);
const V2: Vec2 = Vec2::new(100.0, 0.0);
const V3: Vec2 = Vec2::new(50.0, 80.0);

fn run(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

/// Zieht eine Kante per Klick, Loslassen, Mausrad und Klick auf das Ziel.
fn connect(
    controller: &mut AppController,
    state: &mut AppState,
    from: Vec2,
    to: Vec2,
    weight: i32,
) {
    run(controller, state, AppIntent::PrimaryPressed { pos: from });
    run(controller, state, AppIntent::PrimaryReleased { pos: from });
    run(
        controller,
        state,
        AppIntent::WheelScrolled {
            pos: from,
            steps: weight,
        },
    );
    run(controller, state, AppIntent::PrimaryPressed { pos: to });
}

/// Dreieck über Zeiger-Intents: Gewichte V1–V2 = 1, V2–V3 = 2, V1–V3 = 3.
fn triangle_via_pointer() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for pos in [V1, V2, V3] {
        run(&mut controller, &mut state, AppIntent::PrimaryPressed { pos });
    }
    connect(&mut controller, &mut state, V1, V3, 3);
    connect(&mut controller, &mut state, V1, V2, 1);
    connect(&mut controller, &mut state, V2, V3, 2);

    (controller, state)
}

fn statuses(state: &AppState) -> Vec<EdgeStatus> {
    state.graph.edges_iter().map(|e| e.status).collect()
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);
    run(&mut controller, &mut state, AppIntent::ExitRequested);
    assert!(state.should_exit);

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
    assert_eq!(state.command_log.total(), 1);
}

#[test]
fn test_stacked_vertices_via_intents_stay_selectable() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let stack = Vec2::new(500.0, 500.0);

    for i in 0..40 {
        run(
            &mut controller,
            &mut state,
            AppIntent::CreateVertex {
                pos: Vec2::new(i as f32 * 25.0, i as f32 * 0.5),
            },
        );
    }
    let ids: Vec<u64> = state.graph.vertices_iter().map(|v| v.id).collect();
    for &vertex_id in &ids {
        run(
            &mut controller,
            &mut state,
            AppIntent::MoveVertex {
                vertex_id,
                pos: stack,
            },
        );
    }

    run(&mut controller, &mut state, AppIntent::PointerSelect { pos: stack });
    assert_eq!(state.vertex_count(), 40);
    assert_eq!(state.selection.hovered, Some(Selectable::Vertex(ids[0])));
}

#[test]
fn test_pointer_builds_triangle() {
    let (_, state) = triangle_via_pointer();

    assert_eq!(state.vertex_count(), 3);
    assert_eq!(state.edge_count(), 3);
    assert_eq!(state.editor_mode(), Some(EditorMode::Free));

    let weights: Vec<u32> = state.graph.sorted_edges().iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![1, 2, 3]);
    assert_eq!(
        state.status_message(),
        "Press [SPACE] to run Kruskal's algorithm."
    );
}

#[test]
fn test_drag_moves_vertex_without_creating_edge() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    run(&mut controller, &mut state, AppIntent::PrimaryPressed { pos: V1 });
    let id = state.graph.vertices_iter().map(|v| v.id).next().expect("Vertex erwartet");

    run(&mut controller, &mut state, AppIntent::PrimaryPressed { pos: V1 });
    assert_eq!(
        state.editor_mode(),
        Some(EditorMode::Clicking { vertex_id: id })
    );

    run(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(20.0, 5.0),
        },
    );
    run(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(40.0, 10.0),
        },
    );
    assert_eq!(
        state.editor_mode(),
        Some(EditorMode::Dragging { vertex_id: id })
    );

    run(
        &mut controller,
        &mut state,
        AppIntent::PrimaryReleased {
            pos: Vec2::new(40.0, 10.0),
        },
    );

    assert_eq!(state.editor_mode(), Some(EditorMode::Free));
    assert_eq!(state.vertex_count(), 1);
    assert_eq!(state.edge_count(), 0);
    assert_eq!(
        state.graph.vertex(id).map(|v| v.position),
        Some(Vec2::new(40.0, 10.0))
    );
}

#[test]
fn test_holding_edge_weight_never_negative_and_cancel() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    run(&mut controller, &mut state, AppIntent::PrimaryPressed { pos: V1 });
    run(&mut controller, &mut state, AppIntent::PrimaryPressed { pos: V1 });
    run(&mut controller, &mut state, AppIntent::PrimaryReleased { pos: V1 });

    run(
        &mut controller,
        &mut state,
        AppIntent::WheelScrolled {
            pos: V1,
            steps: -5,
        },
    );
    assert!(matches!(
        state.editor_mode(),
        Some(EditorMode::HoldingEdge { weight: 0, .. })
    ));

    run(&mut controller, &mut state, AppIntent::SecondaryPressed { pos: V1 });
    assert_eq!(state.editor_mode(), Some(EditorMode::Free));
    assert_eq!(state.vertex_count(), 1);
}

#[test]
fn test_hover_while_holding_edge_ignores_edges() {
    let (mut controller, mut state) = triangle_via_pointer();
    let midpoint = (V1 + V2) * 0.5;

    run(&mut controller, &mut state, AppIntent::PointerMoved { pos: midpoint });
    assert!(matches!(state.selection.hovered, Some(Selectable::Edge(_))));

    run(&mut controller, &mut state, AppIntent::PrimaryPressed { pos: V3 });
    run(&mut controller, &mut state, AppIntent::PrimaryReleased { pos: V3 });
    run(&mut controller, &mut state, AppIntent::PointerMoved { pos: midpoint });
    assert_eq!(state.selection.hovered, None);
}

#[test]
fn test_secondary_click_removes_vertex_and_edges() {
    let (mut controller, mut state) = triangle_via_pointer();

    run(&mut controller, &mut state, AppIntent::SecondaryPressed { pos: V3 });

    assert_eq!(state.vertex_count(), 2);
    assert_eq!(state.edge_count(), 1);
    assert_eq!(state.graph.sorted_edges()[0].weight, 1);
}

#[test]
fn test_start_rejected_for_unusable_graph() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert_eq!(state.status_message(), "Graph needs at least one edge.");

    run(&mut controller, &mut state, AppIntent::ConfirmRequested);
    assert!(!state.is_running_algorithm());

    for pos in [V1, V2, V3] {
        run(&mut controller, &mut state, AppIntent::PrimaryPressed { pos });
    }
    connect(&mut controller, &mut state, V1, V2, 1);
    assert_eq!(state.status_message(), "Graph must be connected.");

    run(&mut controller, &mut state, AppIntent::ConfirmRequested);
    assert!(!state.is_running_algorithm());
}

#[test]
fn test_stepping_run_classifies_triangle() {
    let (mut controller, mut state) = triangle_via_pointer();

    run(&mut controller, &mut state, AppIntent::ConfirmRequested);
    assert!(state.is_running_algorithm());
    assert_eq!(
        state.status_message(),
        "Click anywhere to step through the algorithm, or press [SPACE] to play it."
    );

    // Erster Halbschritt markiert die leichteste Kante
    run(&mut controller, &mut state, AppIntent::PrimaryPressed { pos: V3 });
    let lightest = state.graph.sorted_edges()[0].id;
    assert_eq!(state.runner().and_then(|r| r.current_edge()), Some(lightest));
    assert_eq!(
        state.graph.edge(lightest).map(|e| e.status),
        Some(EdgeStatus::Checking)
    );

    for _ in 0..5 {
        run(&mut controller, &mut state, AppIntent::PrimaryPressed { pos: V3 });
    }

    assert_eq!(
        state.runner().map(|r| r.state()),
        Some(RunnerState::Done)
    );
    let by_weight: Vec<EdgeStatus> = state
        .graph
        .sorted_edges()
        .iter()
        .map(|e| e.status)
        .collect();
    assert_eq!(
        by_weight,
        vec![EdgeStatus::Included, EdgeStatus::Included, EdgeStatus::Excluded]
    );
    assert_eq!(state.graph.spanning_weight(), 3);
    assert_eq!(
        state.status_message(),
        "Finished! Total weight is 3. Click anywhere to return to the editor."
    );
}

#[test]
fn test_play_then_host_ticks_until_done() {
    let (mut controller, mut state) = triangle_via_pointer();
    run(&mut controller, &mut state, AppIntent::ConfirmRequested);
    run(&mut controller, &mut state, AppIntent::ConfirmRequested);
    assert_eq!(
        state.runner().map(|r| r.state()),
        Some(RunnerState::Playing)
    );

    // Klicks werden im Abspielmodus ignoriert
    run(&mut controller, &mut state, AppIntent::PrimaryPressed { pos: V1 });
    assert_eq!(state.runner().map(|r| r.progress()), Some((0, 3)));

    let mut ticks = 0;
    while state.runner().map(|r| r.state()) == Some(RunnerState::Playing) {
        run(&mut controller, &mut state, AppIntent::AdvanceAlgorithmStep);
        ticks += 1;
    }

    assert_eq!(ticks, 6);
    assert_eq!(state.graph.spanning_weight(), 3);
}

#[test]
fn test_return_to_editor_resets_classification() {
    let (mut controller, mut state) = triangle_via_pointer();
    let before: Vec<(u64, u64, u64, u32)> = state
        .graph
        .edges_iter()
        .map(|e| (e.id, e.a, e.b, e.weight))
        .collect();

    run(&mut controller, &mut state, AppIntent::StartAlgorithmRequested);
    run(&mut controller, &mut state, AppIntent::FinishAlgorithmRequested);
    assert!(statuses(&state).iter().all(|s| *s != EdgeStatus::Unchecked));

    // Klick im fertigen Zustand kehrt in den Editor zurück
    run(&mut controller, &mut state, AppIntent::PrimaryPressed { pos: V1 });

    assert!(matches!(state.mode, AppMode::Editor(EditorMode::Free)));
    assert!(statuses(&state).iter().all(|s| *s == EdgeStatus::Unchecked));
    let after: Vec<(u64, u64, u64, u32)> = state
        .graph
        .edges_iter()
        .map(|e| (e.id, e.a, e.b, e.weight))
        .collect();
    assert_eq!(before, after);
    assert_eq!(state.vertex_count(), 3);
}

#[test]
fn test_return_mid_run_discards_partial_result() {
    let (mut controller, mut state) = triangle_via_pointer();
    run(&mut controller, &mut state, AppIntent::StartAlgorithmRequested);
    run(&mut controller, &mut state, AppIntent::AdvanceAlgorithmStep);
    run(&mut controller, &mut state, AppIntent::AdvanceAlgorithmStep);
    run(&mut controller, &mut state, AppIntent::AdvanceAlgorithmStep);

    run(&mut controller, &mut state, AppIntent::ReturnToEditorRequested);

    assert!(!state.is_running_algorithm());
    assert!(statuses(&state).iter().all(|s| *s == EdgeStatus::Unchecked));
    assert_eq!(state.graph.spanning_weight(), 0);
}
