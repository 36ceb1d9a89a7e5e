//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** `arrled-firmware::hal` (RMT, UART, Flash)
//! - **Testing:** Mocks in `arrled-tests`

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    InitFailed,
    WriteFailed,
}

/// Fehler-Typ für den nichtflüchtigen Speicher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    ReadFailed,
    WriteFailed,
    /// Adresse liegt außerhalb der Speicher-Kapazität
    OutOfRange { address: usize },
}

/// Fehler-Typ für die serielle Schnittstelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    ReadFailed,
    WriteFailed,
}

/// Fehler-Typ beim Lesen des Sense-Eingangs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SenseError {
    ReadFailed,
}

/// Trait für den LED-Strip
///
/// Bekommt immer den kompletten Strip als Pixel-Sequenz und rendert sie sofort.
/// "Buffer anzeigen" und "Vollfarbe anzeigen" sind beide nur ein `write()`.
pub trait LedSink {
    /// Rendert die Pixel in Strip-Reihenfolge
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write<I>(&mut self, pixels: I) -> Result<(), LedError>
    where
        I: IntoIterator<Item = RGB8>;
}

/// Trait für byte-adressierten, nichtflüchtigen Speicher (EEPROM-artig)
///
/// Jeder `write()` muss dauerhaft sein, bevor er zurückkehrt.
pub trait NvStore {
    /// Anzahl adressierbarer Bytes
    fn capacity(&self) -> usize;

    fn read(&mut self, address: usize) -> Result<u8, StoreError>;

    fn write(&mut self, address: usize, value: u8) -> Result<(), StoreError>;
}

/// Trait für die byte-orientierte serielle Schnittstelle
pub trait SerialTransport {
    /// Nicht-blockierendes Lesen: `Ok(None)` wenn gerade keine Daten anliegen
    fn try_read_byte(&mut self) -> Result<Option<u8>, TransportError>;

    /// Blockiert bis ein Byte verfügbar ist
    ///
    /// Es gibt absichtlich keinen Timeout: eine hängende Gegenstelle hält
    /// die gesamte Schleife an.
    fn read_byte_blocking(&mut self) -> Result<u8, TransportError>;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    fn write_byte(&mut self, byte: u8) -> Result<(), TransportError> {
        self.write_bytes(&[byte])
    }

    fn write_text(&mut self, text: &str) -> Result<(), TransportError> {
        self.write_bytes(text.as_bytes())
    }
}
