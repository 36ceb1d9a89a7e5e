// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus arrled-core für die ESP32-C6 Peripherals.
// Die Protokoll-Logik selbst kennt keine Hardware.

pub mod flash_store;
pub mod led_strip;
pub mod uart_transport;

pub use flash_store::FlashStore;
pub use led_strip::RmtLedStrip;
pub use uart_transport::UartTransport;
