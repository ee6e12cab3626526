//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Selektion ===
            AppCommand::UpdateHover { pos } => handlers::selection::update_hover(state, pos),

            // === Editing ===
            AppCommand::SetEditorMode { mode } => handlers::editing::set_editor_mode(state, mode),
            AppCommand::AddVertex { pos } => handlers::editing::add_vertex(state, pos)?,
            AppCommand::MoveVertex { vertex_id, pos } => {
                handlers::editing::move_vertex(state, vertex_id, pos)?
            }
            AppCommand::RemoveVertex { vertex_id } => {
                handlers::editing::remove_vertex(state, vertex_id)?
            }
            AppCommand::RemoveEdge { edge_id } => handlers::editing::remove_edge(state, edge_id)?,
            AppCommand::AddOrUpdateEdge { a, b, weight } => {
                handlers::editing::add_or_update_edge(state, a, b, weight)?
            }
            AppCommand::AdjustEdgeWeight { edge_id, delta } => {
                handlers::editing::adjust_edge_weight(state, edge_id, delta)?
            }
            AppCommand::AdjustPendingWeight { delta } => {
                handlers::editing::adjust_pending_weight(state, delta)
            }

            // === Algorithmus ===
            AppCommand::StartAlgorithm => handlers::algorithm::start(state)?,
            AppCommand::StepAlgorithm => handlers::algorithm::step(state)?,
            AppCommand::PlayAlgorithm => handlers::algorithm::play(state),
            AppCommand::FinishAlgorithm => handlers::algorithm::finish(state)?,
            AppCommand::ReturnToEditor => handlers::algorithm::return_to_editor(state),

            // === Anwendung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }
}
