//! Kommando-Interpreter: Framing, Dispatch und Ausführung
//!
//! Ablauf pro Iteration:
//! 1. Ein Byte nicht-blockierend lesen. Keine Daten → nichts tun.
//! 2. Byte != `0xFF` → Hilfetext senden, Iteration beenden.
//! 3. Instruction-Byte und Argumente blockierend lesen.
//! 4. Kommando ausführen oder mit Error-Token ablehnen.
//!
//! Effekte werden erst sichtbar, wenn das komplette Frame gelesen ist.

use crate::controller::{ControlError, Controller};
use crate::protocol::{Command, ERROR_TOKEN, FRAME_BYTE, HELP_TEXT, Instruction};
use crate::traits::{LedSink, NvStore, SerialTransport, TransportError};
use crate::types::{Outcome, Rejection};

/// Was von der Schnittstelle gelesen wurde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Received {
    Nothing,
    /// Byte außerhalb eines Frames
    Unframed(u8),
    /// Frame mit unbekannter Instruction (keine Argumente gelesen)
    Unknown(u8),
    Command(Command),
}

/// Liest höchstens ein Frame von der Schnittstelle
///
/// Blockiert nur, wenn ein Frame-Start gesehen wurde.
pub fn receive<T: SerialTransport>(transport: &mut T) -> Result<Received, TransportError> {
    let byte = match transport.try_read_byte()? {
        None => return Ok(Received::Nothing),
        Some(byte) => byte,
    };
    if byte != FRAME_BYTE {
        return Ok(Received::Unframed(byte));
    }

    let instruction = match Instruction::try_from(transport.read_byte_blocking()?) {
        Ok(instruction) => instruction,
        Err(unknown) => return Ok(Received::Unknown(unknown)),
    };
    Ok(Received::Command(Command::read_args(instruction, transport)?))
}

impl<L: LedSink, S: NvStore> Controller<L, S> {
    pub(crate) fn process_command<T: SerialTransport>(
        &mut self,
        transport: &mut T,
    ) -> Result<Outcome, ControlError> {
        match receive(transport)? {
            Received::Nothing => Ok(Outcome::Idle),
            Received::Unframed(byte) => {
                transport.write_text(HELP_TEXT)?;
                Ok(Outcome::Help { byte })
            }
            Received::Unknown(instruction) => {
                transport.write_bytes(ERROR_TOKEN)?;
                Ok(Outcome::Rejected(Rejection::UnknownInstruction(instruction)))
            }
            Received::Command(command) => self.execute(command, transport),
        }
    }

    /// Führt ein vollständig gelesenes Kommando aus
    ///
    /// Einzige Argument-Prüfung ist der LED-Index.
    pub fn execute<T: SerialTransport>(
        &mut self,
        command: Command,
        transport: &mut T,
    ) -> Result<Outcome, ControlError> {
        match command {
            Command::SetLed { index, color } => {
                let Some(led) = self.buffer.get_mut(usize::from(index)) else {
                    transport.write_bytes(ERROR_TOKEN)?;
                    return Ok(Outcome::Rejected(Rejection::LedIndexOutOfRange {
                        index,
                        strip_len: self.config.strip_len,
                    }));
                };
                *led = color;
                self.show_buffer()?;
            }
            Command::StoreDefault(color) => {
                self.config
                    .layout
                    .store_default_color(&mut self.store, color)?;
            }
            Command::ReadDefault => {
                let color = self.config.layout.load_default_color(&mut self.store)?;
                transport.write_bytes(&[color.r, color.g, color.b])?;
            }
            Command::ShowColor(color) => self.show_color(color)?,
            Command::SetSenseEnable(enabled) => {
                // Erst persistieren, damit ein Schreibfehler nichts verändert
                self.config
                    .layout
                    .store_sense_enable(&mut self.store, enabled)?;
                self.sense_enabled = enabled;
            }
            Command::StripLength => {
                // validate() garantiert strip_len <= 255
                transport.write_byte(self.config.strip_len as u8)?;
            }
        }
        Ok(Outcome::Executed(command))
    }
}
