//! Start-Konfiguration des Controllers
//!
//! Ersetzt die festen Build-Konstanten (Strip-Länge, Sense-Pin, Speicher-Layout)
//! durch einen Wert, der beim Start einmal geprüft wird.

use crate::persist::PersistLayout;

/// Maximale Strip-Länge
///
/// Indizes sind ein Byte und `0xF9` meldet die Länge als ein Byte.
pub const MAX_STRIP_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    EmptyStrip,
    StripTooLong { len: usize },
    LayoutOverlap,
    LayoutOutOfRange { address: usize, capacity: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Anzahl LEDs im Strip
    pub strip_len: usize,
    /// GPIO-Nummer des Power-Sense-Eingangs, `None` = keine Sense-Hardware
    pub sense_pin: Option<u8>,
    pub layout: PersistLayout,
}

impl Config {
    /// Konfiguration ohne Sense-Pin mit Standard-Layout
    pub fn new(strip_len: usize) -> Self {
        Self {
            strip_len,
            sense_pin: None,
            layout: PersistLayout::default(),
        }
    }

    pub fn with_sense_pin(mut self, pin: u8) -> Self {
        self.sense_pin = Some(pin);
        self
    }

    pub fn with_layout(mut self, layout: PersistLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn has_sense(&self) -> bool {
        self.sense_pin.is_some()
    }

    /// Prüft die Konfiguration gegen die Kapazität des Speichers
    pub fn validate(&self, store_capacity: usize) -> Result<(), ConfigError> {
        if self.strip_len == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        if self.strip_len > MAX_STRIP_LEN {
            return Err(ConfigError::StripTooLong {
                len: self.strip_len,
            });
        }
        self.layout.validate(store_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_valid() {
        let config = Config::new(60).with_sense_pin(4);
        assert!(config.has_sense());
        assert_eq!(config.validate(4), Ok(()));
    }

    #[test]
    fn test_config_empty_strip() {
        assert_eq!(Config::new(0).validate(4), Err(ConfigError::EmptyStrip));
    }

    #[test]
    fn test_config_strip_limits() {
        assert_eq!(Config::new(MAX_STRIP_LEN).validate(4), Ok(()));
        assert_eq!(
            Config::new(256).validate(4),
            Err(ConfigError::StripTooLong { len: 256 })
        );
    }

    #[test]
    fn test_config_checks_layout() {
        let layout = PersistLayout {
            default_color: 10,
            sense_enable: 0,
        };
        let config = Config::new(60).with_layout(layout);
        assert_eq!(
            config.validate(8),
            Err(ConfigError::LayoutOutOfRange {
                address: 12,
                capacity: 8
            })
        );
    }
}
