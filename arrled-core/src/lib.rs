//! ArrLED Core - Plattformunabhängige Protokoll-Logik und Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Kollaborateur-Traits (LED-Strip, Speicher, Serielle
//! Schnittstelle), das Byte-Protokoll und den Controller, der beides verbindet.

#![no_std]

pub mod config;
pub mod controller;
pub mod interpreter;
pub mod persist;
pub mod protocol;
pub mod sense;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use config::{Config, ConfigError, MAX_STRIP_LEN};
pub use controller::{ControlError, Controller};
pub use interpreter::{Received, receive};
pub use persist::PersistLayout;
pub use protocol::{Command, ERROR_TOKEN, FRAME_BYTE, Frame, HELP_TEXT, Instruction};
pub use sense::{PowerSenseMonitor, SenseEdge};
pub use traits::{LedError, LedSink, NvStore, SenseError, SerialTransport, StoreError, TransportError};
pub use types::{BLACK, Outcome, Rejection, Report};

pub use rgb::RGB8;
