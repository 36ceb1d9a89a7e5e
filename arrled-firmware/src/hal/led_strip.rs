// LED-Strip über RMT Peripheral (WS2812B)
//
// Implementiert den LedSink-Trait aus arrled-core, damit der Controller
// ohne Hardware-Abhängigkeit testbar bleibt.

use arrled_core::{LedError, LedSink};
use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::RMT_BUFFER_SIZE;

/// Real Hardware LED-Strip
///
/// Nutzt ESP32 RMT Peripheral um WS2812 LEDs anzusteuern.
///
/// Hinweis: Der Buffer muss 'static sein, daher wird er im Task erstellt
/// und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtLedStrip<'a> {
    led: SmartLedsAdapter<'a, RMT_BUFFER_SIZE>,
}

impl<'a> RmtLedStrip<'a> {
    /// Erstellt einen neuen RmtLedStrip
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(LED_COUNT) Macro)
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [PulseCode; RMT_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::InitFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self { led })
    }
}

impl<'a> LedSink for RmtLedStrip<'a> {
    fn write<I>(&mut self, pixels: I) -> Result<(), LedError>
    where
        I: IntoIterator<Item = RGB8>,
    {
        self.led.write(pixels).map_err(|_| LedError::WriteFailed)
    }
}
