//! HD44780 16×2 Zeichen-LCD hinter einem PCF8574 I²C-Expander
//!
//! Der Treiber nutzt nur die embedded-hal Traits (`I2c`, `DelayNs`)
//! und läuft damit sowohl auf dem ESP32 als auch gegen Mocks im Host-Test.
//!
//! Belegung des Expanders (übliche "LCD1602 I2C" Backpacks):
//!
//! | Bit | Signal    |
//! |-----|-----------|
//! | P0  | RS        |
//! | P1  | RW        |
//! | P2  | EN        |
//! | P3  | Backlight |
//! | P4-7| D4-D7     |

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::traits::{DisplayError, TextDisplay};

/// Standard-Adresse des PCF8574 (manche Boards: 0x3F)
pub const DEFAULT_ADDRESS: u8 = 0x27;

const RS: u8 = 0x01;
const EN: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

const CMD_CLEAR: u8 = 0x01;
/// Cursor nach rechts, kein Display-Shift
const CMD_ENTRY_MODE: u8 = 0x06;
/// Display an, Cursor aus, Blinken aus
const CMD_DISPLAY_ON: u8 = 0x0C;
/// 4-Bit Interface, 2 Zeilen, 5x8 Font
const CMD_FUNCTION_SET: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

pub struct Lcd1602<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    backlight: bool,
}

impl<I2C: I2c, D: DelayNs> Lcd1602<I2C, D> {
    /// Erstellt den Treiber ohne Bus-Zugriff; danach `init()` aufrufen
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            backlight: true,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Initialisierungssequenz für den 4-Bit Modus (HD44780 Datenblatt, Fig. 24)
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Versorgung muss > 40 ms stabil sein
        self.delay.delay_ms(50);
        self.expander_write(0)?;
        self.delay.delay_ms(1);

        // Dreimal 8-Bit Modus anfordern, egal in welchem Zustand der Controller ist
        self.write_nibble(0x30)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30)?;
        self.delay.delay_us(150);

        // Umschalten auf 4-Bit
        self.write_nibble(0x20)?;

        self.command(CMD_FUNCTION_SET)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE)
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        let offset = ROW_OFFSETS
            .get(row as usize)
            .copied()
            .ok_or(DisplayError::OutOfBounds)?;
        self.command(CMD_SET_DDRAM | (offset + col))
    }

    fn command(&mut self, value: u8) -> Result<(), DisplayError> {
        self.send(value, 0)
    }

    fn send(&mut self, value: u8, mode: u8) -> Result<(), DisplayError> {
        self.write_nibble((value & 0xF0) | mode)?;
        self.write_nibble((value << 4) | mode)
    }

    fn write_nibble(&mut self, bits: u8) -> Result<(), DisplayError> {
        self.expander_write(bits)?;
        self.pulse_enable(bits)
    }

    fn pulse_enable(&mut self, bits: u8) -> Result<(), DisplayError> {
        self.expander_write(bits | EN)?;
        self.delay.delay_us(1);
        self.expander_write(bits & !EN)?;
        // Befehle brauchen > 37 µs
        self.delay.delay_us(50);
        Ok(())
    }

    fn expander_write(&mut self, bits: u8) -> Result<(), DisplayError> {
        let backlight = if self.backlight { BACKLIGHT } else { 0 };
        self.i2c
            .write(self.address, &[bits | backlight])
            .map_err(|_| DisplayError::Bus)
    }
}

impl<I2C: I2c, D: DelayNs> TextDisplay for Lcd1602<I2C, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR)?;
        // Clear dauert bis zu 1.52 ms
        self.delay.delay_us(2000);
        Ok(())
    }

    fn print_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row >= Self::ROWS || col >= Self::COLS {
            return Err(DisplayError::OutOfBounds);
        }
        self.set_cursor(row, col)?;

        let room = (Self::COLS - col) as usize;
        for c in text.chars().take(room) {
            // ROM A00 kann nur ASCII sinnvoll darstellen
            let byte = if c.is_ascii() { c as u8 } else { b'?' };
            self.send(byte, RS)?;
        }
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight = on;
        self.expander_write(0)
    }
}
