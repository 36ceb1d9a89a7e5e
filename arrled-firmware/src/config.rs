// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
use arrled_core::{Config, PersistLayout};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Datenleitung des LED-Strips (WS2812B)
/// Nur Dokumentation: muss zum Peripheral in `main.rs` passen (GPIO8).
pub const LED_GPIO_PIN: u8 = 8;

/// Anzahl der LEDs im Strip (max. 255, Index ist ein Byte)
pub const LED_COUNT: usize = 60;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// RMT Buffer-Größe: 24 Pulse pro LED (3 Farben * 8 Bits) + 1 Reset
pub const RMT_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

// ============================================================================
// Power-Sense Konfiguration
// ============================================================================

/// GPIO-Pin für den PC-Power-Sense-Eingang
/// Auf `None` setzen, wenn keine Sense-Leitung angeschlossen ist.
/// Schaltet nur den Sense-Eingang an/aus, der Pin selbst ist in `main.rs`
/// fest verdrahtet (GPIO4) und muss hierzu passen.
pub const SENSE_GPIO_PIN: Option<u8> = Some(4);

// ============================================================================
// UART Konfiguration
// ============================================================================

/// Baudrate der Kommando-Schnittstelle (8N1)
pub const UART_BAUDRATE: u32 = 9600;

/// UART1 TX Pin (USB-Serial-JTAG bleibt frei für defmt-Logs)
/// Nur Dokumentation: muss zum Peripheral in `main.rs` passen (GPIO5).
pub const UART_TX_GPIO_PIN: u8 = 5;

/// UART1 RX Pin
/// Nur Dokumentation: muss zum Peripheral in `main.rs` passen (GPIO6).
pub const UART_RX_GPIO_PIN: u8 = 6;

// ============================================================================
// Speicher Konfiguration
// ============================================================================

/// Flash-Offset des EEPROM-Ersatz-Sektors
/// Letzter 4-KB-Sektor der ersten 4 MB, außerhalb der App-Partition
pub const EEPROM_FLASH_OFFSET: u32 = 0x3F_F000;

/// Größe des EEPROM-Ersatzes in Bytes (ein Flash-Sektor)
pub const EEPROM_SIZE: usize = 4096;

// ============================================================================
// Control Loop
// ============================================================================

/// Wartezeit nach einem Hardware-Fehler, bevor weiter gepollt wird
pub const ERROR_BACKOFF_MS: u64 = 100;

/// Controller-Konfiguration aus den Konstanten oben
pub fn controller_config() -> Config {
    let config = Config::new(LED_COUNT).with_layout(PersistLayout::default());
    match SENSE_GPIO_PIN {
        Some(pin) => config.with_sense_pin(pin),
        None => config,
    }
}
