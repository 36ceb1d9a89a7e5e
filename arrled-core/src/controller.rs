//! Controller: besitzt den gesamten veränderlichen Zustand
//!
//! LED-Buffer, Sense-Flag und letztes Sense-Level liegen hier und werden nur
//! über `poll()` verändert. Dadurch gibt es genau einen Schreiber.

use core::iter;

use embedded_hal::digital::InputPin;
use heapless::Vec;
use rgb::RGB8;

use crate::config::{Config, ConfigError, MAX_STRIP_LEN};
use crate::sense::PowerSenseMonitor;
use crate::traits::{LedError, LedSink, NvStore, SenseError, SerialTransport, StoreError, TransportError};
use crate::types::{BLACK, Report};

/// Fehler der Kollaborateure (Hardware), nicht des Protokolls
///
/// Protokoll-Fehler (ungültiger Index, unbekannte Instruction) sind keine
/// `ControlError`s, sondern ein `Outcome::Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    Config(ConfigError),
    Led(LedError),
    Store(StoreError),
    Transport(TransportError),
    Sense(SenseError),
}

impl From<ConfigError> for ControlError {
    fn from(e: ConfigError) -> Self {
        ControlError::Config(e)
    }
}

impl From<LedError> for ControlError {
    fn from(e: LedError) -> Self {
        ControlError::Led(e)
    }
}

impl From<StoreError> for ControlError {
    fn from(e: StoreError) -> Self {
        ControlError::Store(e)
    }
}

impl From<TransportError> for ControlError {
    fn from(e: TransportError) -> Self {
        ControlError::Transport(e)
    }
}

impl From<SenseError> for ControlError {
    fn from(e: SenseError) -> Self {
        ControlError::Sense(e)
    }
}

pub struct Controller<L, S> {
    pub(crate) config: Config,
    pub(crate) sink: L,
    pub(crate) store: S,
    pub(crate) buffer: Vec<RGB8, MAX_STRIP_LEN>,
    pub(crate) sense_enabled: bool,
    pub(crate) monitor: PowerSenseMonitor,
}

impl<L: LedSink, S: NvStore> Controller<L, S> {
    /// Prüft die Konfiguration und lädt das Sense-Flag aus dem Speicher
    ///
    /// Ohne Sense-Pin bleibt das Flag an und wird nicht gelesen.
    pub fn new(config: Config, sink: L, mut store: S) -> Result<Self, ControlError> {
        config.validate(store.capacity())?;

        let mut buffer = Vec::new();
        buffer
            .resize(config.strip_len, BLACK)
            .map_err(|_| ConfigError::StripTooLong {
                len: config.strip_len,
            })?;

        let sense_enabled = if config.has_sense() {
            config.layout.load_sense_enable(&mut store)?
        } else {
            true
        };

        Ok(Self {
            config,
            sink,
            store,
            buffer,
            sense_enabled,
            monitor: PowerSenseMonitor::new(),
        })
    }

    /// Eine Schleifen-Iteration: erst Power-Sense, dann ein Kommando-Versuch
    ///
    /// `sense` wird nur ausgewertet, wenn die Konfiguration einen Sense-Pin hat.
    /// Nach einem Frame-Start blockiert diese Methode, bis das Frame komplett ist.
    pub fn poll<T, P>(
        &mut self,
        transport: &mut T,
        sense: Option<&mut P>,
    ) -> Result<Report, ControlError>
    where
        T: SerialTransport,
        P: InputPin,
    {
        let sense = match sense {
            Some(pin) if self.config.has_sense() => self.observe_sense(pin)?,
            _ => None,
        };
        let outcome = self.process_command(transport)?;
        Ok(Report { sense, outcome })
    }

    /// Rendert den aktuellen Buffer (beim Start: alles schwarz)
    pub fn show_buffer(&mut self) -> Result<(), ControlError> {
        self.sink.write(self.buffer.iter().copied())?;
        Ok(())
    }

    /// Vollfarbe auf dem ganzen Strip, der Buffer bleibt unverändert
    pub fn show_color(&mut self, color: RGB8) -> Result<(), ControlError> {
        self.sink
            .write(iter::repeat_n(color, self.config.strip_len))?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn buffer(&self) -> &[RGB8] {
        &self.buffer
    }

    pub fn sense_enabled(&self) -> bool {
        self.sense_enabled
    }

    pub fn monitor(&self) -> &PowerSenseMonitor {
        &self.monitor
    }

    pub fn sink(&self) -> &L {
        &self.sink
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
