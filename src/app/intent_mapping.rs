//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Die Zeiger-Intents bilden den Editor-Zustandsautomaten ab:
//!
//! | Modus        | Eingabe                 | Folge                                  |
//! |--------------|-------------------------|----------------------------------------|
//! | Free         | Primär auf leerer Fläche| Vertex anlegen                         |
//! | Free         | Primär auf Vertex       | → Clicking                             |
//! | Free         | Sekundär auf Element    | Element entfernen                      |
//! | Free         | Rad auf Kante           | Kantengewicht ändern                   |
//! | Free         | Leertaste               | Algorithmus starten                    |
//! | Clicking     | Bewegung                | → Dragging, Vertex verschieben         |
//! | Clicking     | Primär los              | → HoldingEdge                          |
//! | Dragging     | Bewegung                | Vertex verschieben                     |
//! | Dragging     | Primär los              | → Free                                 |
//! | HoldingEdge  | Primär auf anderem Vertex | Kante anlegen, → Free                |
//! | HoldingEdge  | Sekundär                | → Free                                 |
//! | HoldingEdge  | Rad                     | Gewicht der neuen Kante ändern         |

use glam::Vec2;

use super::runner::RunnerState;
use super::state::{AppMode, EditorMode};
use super::{AppCommand, AppIntent, AppState};
use crate::core::Selectable;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerMoved { .. }
        | AppIntent::PrimaryPressed { .. }
        | AppIntent::PrimaryReleased { .. }
        | AppIntent::SecondaryPressed { .. }
        | AppIntent::WheelScrolled { .. }
        | AppIntent::ConfirmRequested => match &state.mode {
            AppMode::Editor(mode) => map_editor_input(state, *mode, intent),
            AppMode::Algorithm(runner) => map_algorithm_input(runner.state(), intent),
        },

        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::PointerSelect { pos } => vec![AppCommand::UpdateHover { pos }],
        AppIntent::CreateVertex { pos } => vec![AppCommand::AddVertex { pos }],
        AppIntent::MoveVertex { vertex_id, pos } => {
            vec![AppCommand::MoveVertex { vertex_id, pos }]
        }
        AppIntent::RemoveElement { element } => vec![remove_command(element)],
        AppIntent::CreateOrUpdateEdge { a, b, weight } => {
            vec![AppCommand::AddOrUpdateEdge { a, b, weight }]
        }
        AppIntent::AdjustEdgeWeight { edge_id, delta } => {
            vec![AppCommand::AdjustEdgeWeight { edge_id, delta }]
        }

        AppIntent::StartAlgorithmRequested => vec![AppCommand::StartAlgorithm],
        AppIntent::AdvanceAlgorithmStep => vec![AppCommand::StepAlgorithm],
        AppIntent::PlayAlgorithmRequested => vec![AppCommand::PlayAlgorithm],
        AppIntent::FinishAlgorithmRequested => vec![AppCommand::FinishAlgorithm],
        AppIntent::ReturnToEditorRequested => vec![AppCommand::ReturnToEditor],
    }
}

fn remove_command(element: Selectable) -> AppCommand {
    match element {
        Selectable::Vertex(vertex_id) => AppCommand::RemoveVertex { vertex_id },
        Selectable::Edge(edge_id) => AppCommand::RemoveEdge { edge_id },
    }
}

fn hit_at(state: &AppState, pos: Vec2) -> Option<Selectable> {
    state
        .graph
        .nearest_selectable(pos, &state.options.hit_test_config())
}

fn vertex_at(state: &AppState, pos: Vec2) -> Option<u64> {
    state
        .graph
        .nearest_vertex(pos, state.options.vertex_hit_radius)
}

fn map_editor_input(state: &AppState, mode: EditorMode, intent: AppIntent) -> Vec<AppCommand> {
    match (mode, intent) {
        // === Free ===
        (EditorMode::Free, AppIntent::PointerMoved { pos }) => {
            vec![AppCommand::UpdateHover { pos }]
        }
        (EditorMode::Free, AppIntent::PrimaryPressed { pos }) => match hit_at(state, pos) {
            None => vec![
                AppCommand::AddVertex { pos },
                AppCommand::UpdateHover { pos },
            ],
            Some(Selectable::Vertex(vertex_id)) => vec![AppCommand::SetEditorMode {
                mode: EditorMode::Clicking { vertex_id },
            }],
            Some(Selectable::Edge(_)) => Vec::new(),
        },
        (EditorMode::Free, AppIntent::SecondaryPressed { pos }) => match hit_at(state, pos) {
            Some(element) => vec![remove_command(element), AppCommand::UpdateHover { pos }],
            None => Vec::new(),
        },
        (EditorMode::Free, AppIntent::WheelScrolled { pos, steps }) => match hit_at(state, pos) {
            Some(Selectable::Edge(edge_id)) => vec![AppCommand::AdjustEdgeWeight {
                edge_id,
                delta: steps.saturating_mul(state.options.weight_scroll_step),
            }],
            _ => Vec::new(),
        },
        (EditorMode::Free, AppIntent::ConfirmRequested) => vec![AppCommand::StartAlgorithm],

        // === Clicking ===
        (EditorMode::Clicking { vertex_id }, AppIntent::PointerMoved { pos }) => vec![
            AppCommand::SetEditorMode {
                mode: EditorMode::Dragging { vertex_id },
            },
            AppCommand::MoveVertex { vertex_id, pos },
        ],
        (EditorMode::Clicking { vertex_id }, AppIntent::PrimaryReleased { .. }) => {
            vec![AppCommand::SetEditorMode {
                mode: EditorMode::HoldingEdge {
                    from_id: vertex_id,
                    weight: state.options.default_new_edge_weight,
                },
            }]
        }

        // === Dragging ===
        (EditorMode::Dragging { vertex_id }, AppIntent::PointerMoved { pos }) => vec![
            AppCommand::MoveVertex { vertex_id, pos },
            AppCommand::UpdateHover { pos },
        ],
        (EditorMode::Dragging { .. }, AppIntent::PrimaryReleased { .. }) => {
            vec![AppCommand::SetEditorMode {
                mode: EditorMode::Free,
            }]
        }

        // === HoldingEdge ===
        (EditorMode::HoldingEdge { .. }, AppIntent::PointerMoved { pos }) => {
            vec![AppCommand::UpdateHover { pos }]
        }
        (EditorMode::HoldingEdge { from_id, weight }, AppIntent::PrimaryPressed { pos }) => {
            match vertex_at(state, pos) {
                Some(target) if target != from_id => vec![
                    AppCommand::AddOrUpdateEdge {
                        a: from_id,
                        b: target,
                        weight,
                    },
                    AppCommand::SetEditorMode {
                        mode: EditorMode::Free,
                    },
                ],
                _ => Vec::new(),
            }
        }
        (EditorMode::HoldingEdge { .. }, AppIntent::SecondaryPressed { .. }) => {
            vec![AppCommand::SetEditorMode {
                mode: EditorMode::Free,
            }]
        }
        (EditorMode::HoldingEdge { .. }, AppIntent::WheelScrolled { steps, .. }) => {
            vec![AppCommand::AdjustPendingWeight {
                delta: steps.saturating_mul(state.options.weight_scroll_step),
            }]
        }

        _ => Vec::new(),
    }
}

fn map_algorithm_input(runner_state: RunnerState, intent: AppIntent) -> Vec<AppCommand> {
    match (runner_state, intent) {
        (RunnerState::Stepping, AppIntent::PrimaryPressed { .. }) => {
            vec![AppCommand::StepAlgorithm]
        }
        (RunnerState::Stepping, AppIntent::ConfirmRequested) => vec![AppCommand::PlayAlgorithm],
        (RunnerState::Done, AppIntent::PrimaryPressed { .. }) => vec![AppCommand::ReturnToEditor],
        _ => Vec::new(),
    }
}
