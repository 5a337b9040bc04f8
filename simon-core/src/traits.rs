//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::types::{Color, ColorSet};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Fehler-Typ für Taster-Abfragen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    ReadFailed,
}

/// Fehler-Typ für das Text-Display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// I²C-Übertragung fehlgeschlagen
    Bus,
    /// Cursor außerhalb von 16×2
    OutOfBounds,
}

/// Sammel-Fehler des Spielablaufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameError {
    Led(LedError),
    Input(InputError),
    Display(DisplayError),
}

impl From<LedError> for GameError {
    fn from(e: LedError) -> Self {
        GameError::Led(e)
    }
}

impl From<InputError> for GameError {
    fn from(e: InputError) -> Self {
        GameError::Input(e)
    }
}

impl From<DisplayError> for GameError {
    fn from(e: DisplayError) -> Self {
        GameError::Display(e)
    }
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf die RGB Status-LED (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Die vier Spiel-LEDs
pub trait Leds {
    /// Schaltet die LED einer Farbe ein (`lit = true`) oder aus
    fn set(&mut self, color: Color, lit: bool) -> Result<(), LedError>;

    fn set_all(&mut self, lit: bool) -> Result<(), LedError> {
        for color in Color::ALL {
            self.set(color, lit)?;
        }
        Ok(())
    }

    /// Fehlgeschlagene Schreibzugriffe auf eine Neben-Anzeige (Status-LED),
    /// die das Spiel nicht unterbrechen
    fn mirror_failures(&self) -> u32 {
        0
    }
}

/// Die vier Spiel-Taster
pub trait Buttons {
    /// Liest einen Schnappschuss aller gedrückten Taster
    fn read(&mut self) -> Result<ColorSet, InputError>;
}

/// Zeichen-Display mit Zeilen/Spalten-Adressierung
///
/// # Implementierungen
/// - **Production:** Lcd1602 (HD44780 hinter PCF8574)
/// - **Testing:** MockDisplay
pub trait TextDisplay {
    /// Anzahl Zeilen
    const ROWS: u8 = 2;
    /// Anzahl Spalten
    const COLS: u8 = 16;

    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Schreibt Text ab (row, col); Text jenseits des rechten Rands wird abgeschnitten
    fn print_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError>;

    /// Ersetzt eine ganze Zeile; Reste eines längeren Texts werden gelöscht
    fn print_line(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
        const BLANK: &str = "                                ";
        let width = (Self::COLS as usize).min(BLANK.len());
        self.print_at(row, 0, &BLANK[..width])?;
        self.print_at(row, 0, text)
    }

    /// Display löschen und bis zu zwei Zeilen schreiben
    fn show(&mut self, line1: &str, line2: Option<&str>) -> Result<(), DisplayError> {
        self.clear()?;
        self.print_at(0, 0, line1)?;
        if let Some(line2) = line2 {
            self.print_at(1, 0, line2)?;
        }
        Ok(())
    }
}
