// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von arrled-core
pub use arrled_core::{
    Command, Config, ControlError, Controller, LedError, LedSink, NvStore, Outcome, SerialTransport,
};

// ============================================================================
// Testing
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal).
// Die komplette Protokoll-Logik liegt deshalb in arrled-core und wird in
// arrled-tests auf dem Host mit Mock-Implementierungen getestet.
// Hier liegen nur die Hardware-Adapter und die Task-Verdrahtung.
