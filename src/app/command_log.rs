//! Verlauf der zuletzt ausgeführten Commands.

use std::collections::VecDeque;

use super::AppCommand;

/// Hält die letzten `CAPACITY` Commands und zählt alle ausgeführten.
#[derive(Debug, Default)]
pub struct CommandLog {
    recent: VecDeque<AppCommand>,
    total: usize,
}

impl CommandLog {
    const CAPACITY: usize = 256;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merkt sich einen ausgeführten Command, der älteste fällt bei voller Kapazität heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.recent.len() == Self::CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(command.clone());
        self.total += 1;
    }

    /// Anzahl aller seit dem Start ausgeführten Commands
    pub fn total(&self) -> usize {
        self.total
    }

    /// Zuletzt ausgeführter Command
    pub fn last(&self) -> Option<&AppCommand> {
        self.recent.back()
    }

    /// Die zuletzt ausgeführten Commands, älteste zuerst
    pub fn recent(&self) -> impl Iterator<Item = &AppCommand> {
        self.recent.iter()
    }
}
