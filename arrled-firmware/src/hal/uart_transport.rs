// Serielle Kommando-Schnittstelle über UART
//
// Generisch über die embedded-io Traits, die der esp-hal UART im
// Blocking-Modus implementiert.

use arrled_core::{SerialTransport, TransportError};
use embedded_io::{Read, ReadReady, Write};

pub struct UartTransport<U> {
    uart: U,
}

impl<U> UartTransport<U>
where
    U: Read + ReadReady + Write,
{
    pub fn new(uart: U) -> Self {
        Self { uart }
    }
}

impl<U> SerialTransport for UartTransport<U>
where
    U: Read + ReadReady + Write,
{
    fn try_read_byte(&mut self) -> Result<Option<u8>, TransportError> {
        let ready = self
            .uart
            .read_ready()
            .map_err(|_| TransportError::ReadFailed)?;
        if !ready {
            return Ok(None);
        }
        self.read_byte_blocking().map(Some)
    }

    fn read_byte_blocking(&mut self) -> Result<u8, TransportError> {
        // read_exact() kehrt erst zurück, wenn das Byte da ist (kein Timeout)
        let mut byte = [0u8; 1];
        self.uart
            .read_exact(&mut byte)
            .map_err(|_| TransportError::ReadFailed)?;
        Ok(byte[0])
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.uart
            .write_all(bytes)
            .map_err(|_| TransportError::WriteFailed)?;
        self.uart.flush().map_err(|_| TransportError::WriteFailed)
    }
}
