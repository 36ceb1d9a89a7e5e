//! Byte-Protokoll der seriellen Schnittstelle
//!
//! Frame-Format: `0xFF <instruction> <args...>`
//!
//! Jede Instruction hat eine feste Anzahl Argument-Bytes, es gibt weder
//! Längenfeld noch Checksumme noch Escaping.

use core::ops::Deref;

use rgb::RGB8;

use crate::traits::{SerialTransport, TransportError};

/// Start-Byte jedes Frames
pub const FRAME_BYTE: u8 = 0xFF;

/// Antwort bei ungültigem LED-Index oder unbekannter Instruction
pub const ERROR_TOKEN: &[u8] = b"err";

/// Längstes Frame: Start + Instruction + Index + r, g, b
pub const MAX_FRAME_LEN: usize = 6;

/// Antwort auf Bytes außerhalb eines Frames
pub const HELP_TEXT: &str = "\
welcome to ArrLED!\n\
commands fmt: 0xff <inst byte> <args>\n\
ff-$i-$r-$g-$b set led\n\
fe-$r-$g-$b    store default color\n\
fc             read default color (3 bytes)\n\
fb-$r-$g-$b    show color on all\n\
fa-$on         power sense on/off\n\
f9             read led count (1 byte)\n";

/// Instruction-Byte nach dem Frame-Start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Instruction {
    SetLed = 0xFF,
    StoreDefault = 0xFE,
    ReadDefault = 0xFC,
    ShowColor = 0xFB,
    SetSenseEnable = 0xFA,
    StripLength = 0xF9,
}

impl Instruction {
    /// Anzahl Argument-Bytes, die nach dem Instruction-Byte folgen
    pub const fn arg_len(self) -> usize {
        match self {
            Instruction::SetLed => 4,
            Instruction::StoreDefault | Instruction::ShowColor => 3,
            Instruction::SetSenseEnable => 1,
            Instruction::ReadDefault | Instruction::StripLength => 0,
        }
    }
}

impl TryFrom<u8> for Instruction {
    /// Das unbekannte Byte
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0xFF => Ok(Instruction::SetLed),
            0xFE => Ok(Instruction::StoreDefault),
            0xFC => Ok(Instruction::ReadDefault),
            0xFB => Ok(Instruction::ShowColor),
            0xFA => Ok(Instruction::SetSenseEnable),
            0xF9 => Ok(Instruction::StripLength),
            other => Err(other),
        }
    }
}

impl From<Instruction> for u8 {
    fn from(instruction: Instruction) -> Self {
        instruction as u8
    }
}

/// Vollständig gelesenes Kommando inklusive Argumente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Setze eine LED im Buffer und rendere den Buffer
    SetLed { index: u8, color: RGB8 },
    /// Speichere die Default-Farbe
    StoreDefault(RGB8),
    /// Sende die gespeicherte Default-Farbe zurück
    ReadDefault,
    /// Zeige eine Farbe auf dem ganzen Strip (Buffer bleibt unverändert)
    ShowColor(RGB8),
    /// Power-Sense an/aus (jedes Byte != 0 ist "an")
    SetSenseEnable(bool),
    /// Sende die Strip-Länge zurück
    StripLength,
}

impl Command {
    pub fn instruction(&self) -> Instruction {
        match self {
            Command::SetLed { .. } => Instruction::SetLed,
            Command::StoreDefault(_) => Instruction::StoreDefault,
            Command::ReadDefault => Instruction::ReadDefault,
            Command::ShowColor(_) => Instruction::ShowColor,
            Command::SetSenseEnable(_) => Instruction::SetSenseEnable,
            Command::StripLength => Instruction::StripLength,
        }
    }

    /// Liest die Argumente für `instruction` blockierend von der Schnittstelle
    ///
    /// Kehrt erst zurück, wenn alle Argument-Bytes gelesen sind. Bricht die
    /// Schnittstelle mittendrin ab, wird das Frame verworfen.
    pub fn read_args<T: SerialTransport>(
        instruction: Instruction,
        transport: &mut T,
    ) -> Result<Self, TransportError> {
        let command = match instruction {
            Instruction::SetLed => {
                let index = transport.read_byte_blocking()?;
                let color = read_color(transport)?;
                Command::SetLed { index, color }
            }
            Instruction::StoreDefault => Command::StoreDefault(read_color(transport)?),
            Instruction::ReadDefault => Command::ReadDefault,
            Instruction::ShowColor => Command::ShowColor(read_color(transport)?),
            Instruction::SetSenseEnable => {
                Command::SetSenseEnable(transport.read_byte_blocking()? != 0x00)
            }
            Instruction::StripLength => Command::StripLength,
        };
        Ok(command)
    }

    /// Erzeugt die Bytes des Frames, so wie ein Host-Treiber sie sendet
    ///
    /// ```
    /// # use arrled_core::{Command, RGB8};
    /// let frame = Command::ShowColor(RGB8 { r: 255, g: 0, b: 0 }).encode();
    /// assert_eq!(&*frame, &[0xFF, 0xFB, 255, 0, 0]);
    /// ```
    pub fn encode(&self) -> Frame {
        let mut frame = Frame {
            bytes: [0; MAX_FRAME_LEN],
            len: 2 + self.instruction().arg_len(),
        };
        frame.bytes[0] = FRAME_BYTE;
        frame.bytes[1] = self.instruction().into();

        match *self {
            Command::SetLed { index, color } => {
                frame.bytes[2..6].copy_from_slice(&[index, color.r, color.g, color.b]);
            }
            Command::StoreDefault(color) | Command::ShowColor(color) => {
                frame.bytes[2..5].copy_from_slice(&[color.r, color.g, color.b]);
            }
            Command::SetSenseEnable(enabled) => frame.bytes[2] = enabled as u8,
            Command::ReadDefault | Command::StripLength => {}
        }
        frame
    }
}

fn read_color<T: SerialTransport>(transport: &mut T) -> Result<RGB8, TransportError> {
    let r = transport.read_byte_blocking()?;
    let g = transport.read_byte_blocking()?;
    let b = transport.read_byte_blocking()?;
    Ok(RGB8 { r, g, b })
}

/// Kodiertes Frame mit fester Maximal-Länge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; MAX_FRAME_LEN],
    len: usize,
}

impl Deref for Frame {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Command::SetLed { index, color } => defmt::write!(
                fmt,
                "SetLed {{ index: {}, rgb: ({}, {}, {}) }}",
                index,
                color.r,
                color.g,
                color.b
            ),
            Command::StoreDefault(color) => defmt::write!(
                fmt,
                "StoreDefault {{ rgb: ({}, {}, {}) }}",
                color.r,
                color.g,
                color.b
            ),
            Command::ReadDefault => defmt::write!(fmt, "ReadDefault"),
            Command::ShowColor(color) => defmt::write!(
                fmt,
                "ShowColor {{ rgb: ({}, {}, {}) }}",
                color.r,
                color.g,
                color.b
            ),
            Command::SetSenseEnable(enabled) => {
                defmt::write!(fmt, "SetSenseEnable({})", enabled)
            }
            Command::StripLength => defmt::write!(fmt, "StripLength"),
        }
    }
}
