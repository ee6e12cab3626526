//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.
//!
//! Intents beschreiben Eingaben, Commands die daraus abgeleiteten Mutationen.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
