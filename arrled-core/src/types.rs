//! Core Types für die Protokoll-Auswertung
//!
//! Ergebnisse einer Schleifen-Iteration, damit die Firmware sie loggen kann.

use rgb::RGB8;

use crate::protocol::Command;
use crate::sense::SenseEdge;

/// Schwarz (LEDs aus)
pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Ergebnis eines Versuchs, ein Kommando zu lesen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Keine Daten auf der Leitung
    Idle,
    /// Byte ohne Frame-Start empfangen, Hilfetext wurde gesendet
    Help { byte: u8 },
    /// Kommando vollständig gelesen und ausgeführt
    Executed(Command),
    /// Frame gelesen, aber abgelehnt; Error-Token wurde gesendet
    Rejected(Rejection),
}

/// Grund für ein abgelehntes Frame
///
/// Bei einer Ablehnung wird kein Zustand verändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejection {
    LedIndexOutOfRange { index: u8, strip_len: usize },
    UnknownInstruction(u8),
}

/// Zusammenfassung einer Schleifen-Iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    pub sense: Option<SenseEdge>,
    pub outcome: Outcome,
}
