// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von simon-core
pub use simon_core::{
    Color, GameController, GameTiming, Lcd1602, MirroredLeds, OptionalDisplay, PinButtons, PinLeds,
    Sequence,
};

use embassy_time::Delay;
use esp_hal::Blocking;
use esp_hal::gpio::{Input, Output};
use esp_hal::i2c::master::I2c;

use crate::hal::RmtLedWriter;

// ============================================================================
// Type-Aliase für die Hardware-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Embassy Tasks dürfen nicht generisch sein, daher wird der Controller
// hier einmal mit den konkreten ESP32-Typen festgelegt.

/// Spiel-LEDs (GPIO) mit Spiegelung auf die Status-LED
pub type BoardLeds = MirroredLeds<PinLeds<Output<'static>>, RmtLedWriter<'static>>;

/// Spiel-Taster (GPIO, Pull-Up)
pub type BoardButtons = PinButtons<Input<'static>>;

/// LCD über I²C0, Delays blockierend über embassy-time
pub type BoardDisplay = OptionalDisplay<Lcd1602<I2c<'static, Blocking>, Delay>>;

/// Vollständig verdrahteter Controller
pub type FirmwareController = GameController<BoardLeds, BoardButtons, BoardDisplay, Delay>;
