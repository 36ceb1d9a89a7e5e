// EEPROM-Ersatz im internen Flash
//
// Byte-adressiert wie ein EEPROM. `embedded_storage::Storage::write` liest
// den Sektor, löscht ihn und schreibt ihn zurück, daher ist jeder write()
// dauerhaft bevor er zurückkehrt. Kein Wear-Leveling.
//
// Jedes Byte kostet einen Lösch-Zyklus des ganzen Sektors: `0xFE` (drei
// Farb-Bytes) löscht den Sektor bei `EEPROM_FLASH_OFFSET` also dreimal.

use arrled_core::{NvStore, StoreError};
use embedded_storage::{ReadStorage, Storage};
use esp_storage::FlashStorage;

pub struct FlashStore<'a> {
    flash: FlashStorage<'a>,
    offset: u32,
    capacity: usize,
}

impl<'a> FlashStore<'a> {
    /// # Parameter
    /// - `flash`: FLASH Peripheral
    /// - `offset`: Start-Adresse des Bereichs im Flash (Sektor-aligned)
    /// - `capacity`: Größe des Bereichs in Bytes
    pub fn new(flash: esp_hal::peripherals::FLASH<'a>, offset: u32, capacity: usize) -> Self {
        Self {
            flash: FlashStorage::new(flash),
            offset,
            capacity,
        }
    }

    fn flash_address(&self, address: usize) -> Result<u32, StoreError> {
        if address >= self.capacity {
            return Err(StoreError::OutOfRange { address });
        }
        Ok(self.offset + address as u32)
    }
}

impl<'a> NvStore for FlashStore<'a> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn read(&mut self, address: usize) -> Result<u8, StoreError> {
        let flash_address = self.flash_address(address)?;
        let mut byte = [0u8; 1];
        ReadStorage::read(&mut self.flash, flash_address, &mut byte)
            .map_err(|_| StoreError::ReadFailed)?;
        Ok(byte[0])
    }

    fn write(&mut self, address: usize, value: u8) -> Result<(), StoreError> {
        let flash_address = self.flash_address(address)?;
        Storage::write(&mut self.flash, flash_address, &[value]).map_err(|_| StoreError::WriteFailed)
    }
}
