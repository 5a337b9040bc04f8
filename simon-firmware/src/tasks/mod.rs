// Task-Modul: Enthält die Embassy Tasks
//
// Das Spiel läuft als einzelner Task, main() schläft danach.

pub mod game;

// Re-export Tasks für einfachen Import
pub use game::{game_logic, game_task};
