// Task-Modul: Enthält alle Embassy Tasks
//
// Es gibt genau einen Task: die Control Loop. Power-Sense und
// Kommando-Interpreter teilen sich den Controller ohne Locks.

pub mod control_loop;

// Re-export Tasks für einfachen Import
pub use control_loop::{control_loop_logic, control_loop_task};
