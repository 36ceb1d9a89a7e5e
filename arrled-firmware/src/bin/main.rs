// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use arrled_firmware::config::{SENSE_GPIO_PIN, UART_BAUDRATE};
use arrled_firmware::tasks::control_loop_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt den Control Loop Task.
/// Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Kommando-UART: UART1 auf GPIO5 (TX) / GPIO6 (RX), 8N1
    let uart = Uart::new(
        peripherals.UART1,
        UartConfig::default().with_baudrate(UART_BAUDRATE),
    )
    .expect("Failed to initialize UART")
    .with_tx(peripherals.GPIO5)
    .with_rx(peripherals.GPIO6);

    // Power-Sense Eingang (GPIO4), nur wenn konfiguriert
    // Externer Pegel vom PC-Netzteil, daher kein interner Pull
    let sense = SENSE_GPIO_PIN
        .map(|_| Input::new(peripherals.GPIO4, InputConfig::default().with_pull(Pull::None)));

    defmt::info!("ArrLED: starting control loop");

    spawner
        .spawn(control_loop_task(
            peripherals.GPIO8,
            peripherals.RMT,
            uart,
            peripherals.FLASH,
            sense,
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
