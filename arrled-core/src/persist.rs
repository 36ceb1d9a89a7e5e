//! Layout des nichtflüchtigen Speichers
//!
//! Standard-Layout (kompatibel zu bestehenden EEPROM-Inhalten):
//! - Adresse 0..=2: Default-Farbe (r, g, b)
//! - Adresse 3: Power-Sense an/aus (0 = aus, alles andere = an)
//!
//! Es gibt keinen Cache: jeder Zugriff geht direkt an den Speicher.

use rgb::RGB8;

use crate::config::ConfigError;
use crate::traits::{NvStore, StoreError};

/// Adressen der persistierten Werte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersistLayout {
    /// Erste von drei aufeinanderfolgenden Adressen (r, g, b)
    pub default_color: usize,
    pub sense_enable: usize,
}

impl Default for PersistLayout {
    fn default() -> Self {
        Self {
            default_color: 0,
            sense_enable: 3,
        }
    }
}

impl PersistLayout {
    /// Bytes, die die Default-Farbe belegt
    pub const DEFAULT_COLOR_LEN: usize = 3;

    /// Prüft, dass sich die Felder nicht überlappen und in den Speicher passen
    pub fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        let Some(color_end) = self.default_color.checked_add(Self::DEFAULT_COLOR_LEN) else {
            return Err(ConfigError::LayoutOutOfRange {
                address: self.default_color,
                capacity,
            });
        };
        if (self.default_color..color_end).contains(&self.sense_enable) {
            return Err(ConfigError::LayoutOverlap);
        }
        if color_end > capacity {
            return Err(ConfigError::LayoutOutOfRange {
                address: color_end - 1,
                capacity,
            });
        }
        if self.sense_enable >= capacity {
            return Err(ConfigError::LayoutOutOfRange {
                address: self.sense_enable,
                capacity,
            });
        }
        Ok(())
    }

    pub fn load_default_color<S: NvStore>(&self, store: &mut S) -> Result<RGB8, StoreError> {
        Ok(RGB8 {
            r: store.read(self.default_color)?,
            g: store.read(self.default_color + 1)?,
            b: store.read(self.default_color + 2)?,
        })
    }

    /// Drei einzelne Byte-Writes (im Flash also drei Sektor-Löschzyklen)
    pub fn store_default_color<S: NvStore>(
        &self,
        store: &mut S,
        color: RGB8,
    ) -> Result<(), StoreError> {
        store.write(self.default_color, color.r)?;
        store.write(self.default_color + 1, color.g)?;
        store.write(self.default_color + 2, color.b)
    }

    /// Jeder Wert != 0 gilt als "an" (gelöschter Flash mit 0xFF also auch)
    pub fn load_sense_enable<S: NvStore>(&self, store: &mut S) -> Result<bool, StoreError> {
        Ok(store.read(self.sense_enable)? != 0x00)
    }

    pub fn store_sense_enable<S: NvStore>(
        &self,
        store: &mut S,
        enabled: bool,
    ) -> Result<(), StoreError> {
        store.write(self.sense_enable, enabled as u8)
    }
}
