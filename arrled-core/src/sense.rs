//! Power-Sense: reagiert auf Flanken am Sense-Eingang (z.B. PC-Netzteil)
//!
//! - LOW → HIGH: gespeicherte Default-Farbe anzeigen
//! - HIGH → LOW: Strip schwarz schalten
//! - keine Flanke: nichts tun

use embedded_hal::digital::InputPin;

use crate::controller::{ControlError, Controller};
use crate::traits::{LedSink, NvStore, SenseError};
use crate::types::BLACK;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SenseEdge {
    Rising,
    Falling,
}

/// Flanken-Erkennung über aufeinanderfolgende Schleifen-Iterationen
///
/// Startet mit LOW, ein HIGH beim ersten Sample ist also eine steigende Flanke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerSenseMonitor {
    last_level: bool,
}

impl PowerSenseMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_level(&self) -> bool {
        self.last_level
    }

    /// Vergleicht `level` mit dem letzten Sample und merkt es sich
    pub fn observe(&mut self, level: bool) -> Option<SenseEdge> {
        let edge = match (self.last_level, level) {
            (false, true) => Some(SenseEdge::Rising),
            (true, false) => Some(SenseEdge::Falling),
            _ => None,
        };
        self.last_level = level;
        edge
    }
}

impl<L: LedSink, S: NvStore> Controller<L, S> {
    /// Sampled den Sense-Eingang und führt die Flanken-Effekte aus
    ///
    /// Ist Sense deaktiviert, wird weder gelesen noch das letzte Level
    /// aktualisiert.
    pub(crate) fn observe_sense<P: InputPin>(
        &mut self,
        pin: &mut P,
    ) -> Result<Option<SenseEdge>, ControlError> {
        if !self.sense_enabled {
            return Ok(None);
        }

        let level = pin.is_high().map_err(|_| SenseError::ReadFailed)?;
        let edge = self.monitor.observe(level);

        match edge {
            Some(SenseEdge::Rising) => {
                let color = self.config.layout.load_default_color(&mut self.store)?;
                self.show_color(color)?;
            }
            Some(SenseEdge::Falling) => self.show_color(BLACK)?,
            None => {}
        }
        Ok(edge)
    }
}
