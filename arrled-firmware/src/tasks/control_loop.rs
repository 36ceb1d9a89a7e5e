// Control Loop Task - Power-Sense und Kommando-Interpreter in einer Schleife
use arrled_core::{
    Command, Controller, LedSink, NvStore, Outcome, Report, SenseEdge, SerialTransport,
};
use defmt::{debug, error, info, warn};
use embassy_futures::yield_now;
use embassy_time::{Duration, Timer};
use embedded_hal::digital::InputPin;
use esp_hal::Blocking;
use esp_hal::gpio::Input;
use esp_hal::uart::Uart;
use esp_hal_smartled::smart_led_buffer;

use crate::config::{
    EEPROM_FLASH_OFFSET, EEPROM_SIZE, ERROR_BACKOFF_MS, LED_COUNT, RMT_CLOCK_MHZ,
    controller_config,
};
use crate::hal::{FlashStore, RmtLedStrip, UartTransport};

/// Control Loop Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Pro Iteration:
/// - Power-Sense Flanke prüfen (falls konfiguriert und aktiviert)
/// - Höchstens ein Kommando von der seriellen Schnittstelle verarbeiten
///
/// Nach einem Frame-Start blockiert `poll()` bis das Frame komplett ist,
/// auch die Sense-Erkennung steht so lange.
///
/// # Parameter
/// - `controller`: Controller mit LED-Strip und Speicher (Hardware oder Mock)
/// - `transport`: Serielle Schnittstelle
/// - `sense`: Power-Sense Eingang, `None` wenn nicht angeschlossen
pub async fn control_loop_logic<L, S, T, P>(
    mut controller: Controller<L, S>,
    mut transport: T,
    mut sense: Option<P>,
) -> !
where
    L: LedSink,
    S: NvStore,
    T: SerialTransport,
    P: InputPin,
{
    // Strip und Buffer beim Start synchron halten (alles schwarz)
    if let Err(e) = controller.show_buffer() {
        error!("Control: initial render failed: {}", e);
    }

    loop {
        match controller.poll(&mut transport, sense.as_mut()) {
            Ok(report) => log_report(&report),
            Err(e) => {
                error!("Control: {}", e);
                Timer::after(Duration::from_millis(ERROR_BACKOFF_MS)).await;
            }
        }

        // Gibt CPU an den Executor zurück
        yield_now().await;
    }
}

fn log_report(report: &Report) {
    match report.sense {
        Some(SenseEdge::Rising) => info!("Sense: power on, showing default color"),
        Some(SenseEdge::Falling) => info!("Sense: power off, strip dark"),
        None => {}
    }

    match report.outcome {
        Outcome::Idle => {}
        Outcome::Help { byte } => debug!("Serial: unframed byte {=u8:#x}, sent help", byte),
        Outcome::Executed(Command::SetSenseEnable(enabled)) => {
            info!("Serial: power sense {}", if enabled { "on" } else { "off" });
        }
        Outcome::Executed(command) => debug!("Serial: {}", command),
        Outcome::Rejected(rejection) => warn!("Serial: rejected {}", rejection),
    }
}

/// Control Loop Task - Embassy Task
///
/// Übernimmt die Hardware-Initialisierung und ruft dann die testbare
/// `control_loop_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `uart`: konfigurierter UART (Blocking) für Kommandos
/// - `flash`: FLASH Peripheral für Default-Farbe und Sense-Flag
/// - `sense`: Power-Sense Eingang oder `None`
#[embassy_executor::task]
pub async fn control_loop_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    uart: Uart<'static, Blocking>,
    flash: esp_hal::peripherals::FLASH<'static>,
    sense: Option<Input<'static>>,
) {
    // Buffer für SmartLED Daten erstellen (ganzer Strip)
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);

    let strip = match RmtLedStrip::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(strip) => strip,
        Err(e) => {
            error!("Control: LED strip init failed: {}", e);
            return;
        }
    };
    let store = FlashStore::new(flash, EEPROM_FLASH_OFFSET, EEPROM_SIZE);

    let config = controller_config();
    let controller = match Controller::new(config, strip, store) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Control: invalid configuration: {}", e);
            return;
        }
    };

    info!(
        "Control: {} LEDs, sense pin {}, sense {}",
        config.strip_len,
        config.sense_pin,
        if controller.sense_enabled() { "on" } else { "off" }
    );

    control_loop_logic(controller, UartTransport::new(uart), sense).await
}
