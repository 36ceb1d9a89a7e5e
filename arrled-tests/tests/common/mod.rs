//! Mock-Implementierungen der Hardware-Traits für Host-Tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::convert::Infallible;

use arrled_core::{
    Command, Config, Controller, LedError, LedSink, NvStore, Report, SerialTransport, StoreError,
    TransportError,
};
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
use rgb::RGB8;

// ============================================================================
// Mock LED Sink
// ============================================================================

#[derive(Default)]
pub struct MockLedSink {
    /// Alle gerenderten Frames (jeweils der komplette Strip)
    pub frames: Vec<Vec<RGB8>>,
    pub fail_next_write: bool,
}

impl MockLedSink {
    pub fn last_frame(&self) -> Option<&[RGB8]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn write_count(&self) -> usize {
        self.frames.len()
    }
}

impl LedSink for MockLedSink {
    fn write<I>(&mut self, pixels: I) -> Result<(), LedError>
    where
        I: IntoIterator<Item = RGB8>,
    {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }
        self.frames.push(pixels.into_iter().collect());
        Ok(())
    }
}

// ============================================================================
// Mock Store (EEPROM)
// ============================================================================

pub struct MockStore {
    pub bytes: Vec<u8>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockStore {
    /// Gelöschter Speicher (0xFF wie frischer Flash/EEPROM)
    pub fn erased(capacity: usize) -> Self {
        Self::with_bytes(&vec![0xFF; capacity])
    }

    pub fn with_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            write_count: 0,
            fail_next_write: false,
        }
    }
}

impl NvStore for MockStore {
    fn capacity(&self) -> usize {
        self.bytes.len()
    }

    fn read(&mut self, address: usize) -> Result<u8, StoreError> {
        self.bytes
            .get(address)
            .copied()
            .ok_or(StoreError::OutOfRange { address })
    }

    fn write(&mut self, address: usize, value: u8) -> Result<(), StoreError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(StoreError::WriteFailed);
        }
        let byte = self
            .bytes
            .get_mut(address)
            .ok_or(StoreError::OutOfRange { address })?;
        *byte = value;
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Transport
// ============================================================================

/// Serielle Schnittstelle mit vorgegebenen Eingangs-Bytes
///
/// Ein blockierender Read auf leerem Eingang liefert `ReadFailed`
/// statt zu hängen.
#[derive(Default)]
pub struct MockTransport {
    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }

    pub fn feed_command(&mut self, command: Command) {
        self.feed(&command.encode());
    }

    /// Gibt alle gesendeten Bytes zurück und leert den Puffer
    pub fn take_tx(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.tx)
    }
}

impl SerialTransport for MockTransport {
    fn try_read_byte(&mut self) -> Result<Option<u8>, TransportError> {
        Ok(self.rx.pop_front())
    }

    fn read_byte_blocking(&mut self) -> Result<u8, TransportError> {
        self.rx.pop_front().ok_or(TransportError::ReadFailed)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.tx.extend_from_slice(bytes);
        Ok(())
    }
}

// ============================================================================
// Mock Sense Pin
// ============================================================================

#[derive(Default)]
pub struct MockSensePin {
    pub level: bool,
    pub read_count: usize,
    pub fail_next_read: bool,
}

impl ErrorType for MockSensePin {
    type Error = ErrorKind;
}

impl InputPin for MockSensePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(ErrorKind::Other);
        }
        self.read_count += 1;
        Ok(self.level)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// Pin-Typ für Aufrufe ohne Sense-Eingang
pub struct NoSense;

impl ErrorType for NoSense {
    type Error = Infallible;
}

impl InputPin for NoSense {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub type TestController = Controller<MockLedSink, MockStore>;

pub const STRIP_LEN: usize = 10;
pub const STORE_CAPACITY: usize = 16;

pub fn controller() -> TestController {
    Controller::new(
        Config::new(STRIP_LEN),
        MockLedSink::default(),
        MockStore::erased(STORE_CAPACITY),
    )
    .unwrap()
}

pub fn sense_controller(store: MockStore) -> TestController {
    Controller::new(
        Config::new(STRIP_LEN).with_sense_pin(4),
        MockLedSink::default(),
        store,
    )
    .unwrap()
}

/// Eine Iteration ohne Sense-Eingang
pub fn poll(controller: &mut TestController, transport: &mut MockTransport) -> Report {
    controller.poll(transport, None::<&mut NoSense>).unwrap()
}

pub fn rgb(r: u8, g: u8, b: u8) -> RGB8 {
    RGB8 { r, g, b }
}
