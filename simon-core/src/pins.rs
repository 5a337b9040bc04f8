//! Adapter von embedded-hal Pins auf die Spiel-Traits
//!
//! Array-Index = Farb-Index (`Color::index()`), die Zuordnung
//! Farbe → Pin wird einmal beim Erzeugen festgelegt.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::logic::mix_colors;
use crate::traits::{Buttons, InputError, LedError, Leds, SmartLedWriter};
use crate::types::{COLOR_COUNT, Color, ColorSet};

/// Vier LED-Ausgänge, HIGH = leuchtet
pub struct PinLeds<O> {
    pins: [O; COLOR_COUNT],
}

impl<O: OutputPin> PinLeds<O> {
    /// Reihenfolge: Rot, Blau, Grün, Gelb
    pub fn new(pins: [O; COLOR_COUNT]) -> Self {
        Self { pins }
    }

    pub fn release(self) -> [O; COLOR_COUNT] {
        self.pins
    }
}

impl<O: OutputPin> Leds for PinLeds<O> {
    fn set(&mut self, color: Color, lit: bool) -> Result<(), LedError> {
        let pin = &mut self.pins[color.index()];
        let result = if lit { pin.set_high() } else { pin.set_low() };
        result.map_err(|_| LedError::WriteFailed)
    }
}

/// Vier Taster-Eingänge mit Pull-Up, LOW = gedrückt
pub struct PinButtons<I> {
    pins: [I; COLOR_COUNT],
}

impl<I: InputPin> PinButtons<I> {
    /// Reihenfolge: Rot, Blau, Grün, Gelb
    pub fn new(pins: [I; COLOR_COUNT]) -> Self {
        Self { pins }
    }

    pub fn release(self) -> [I; COLOR_COUNT] {
        self.pins
    }
}

impl<I: InputPin> Buttons for PinButtons<I> {
    fn read(&mut self) -> Result<ColorSet, InputError> {
        let mut pressed = ColorSet::EMPTY;
        for color in Color::ALL {
            // Active-Low
            if self.pins[color.index()]
                .is_low()
                .map_err(|_| InputError::ReadFailed)?
            {
                pressed.insert(color);
            }
        }
        Ok(pressed)
    }
}

/// Spiegelt die leuchtenden Spiel-LEDs auf eine RGB Status-LED
///
/// Fehler der Status-LED werden nur gezählt, sie unterbrechen das Spiel nicht.
pub struct MirroredLeds<L, W> {
    leds: L,
    status: W,
    lit: ColorSet,
    brightness: u8,
    mirror_failures: u32,
}

impl<L: Leds, W: SmartLedWriter> MirroredLeds<L, W> {
    pub fn new(leds: L, status: W, brightness: u8) -> Self {
        Self {
            leds,
            status,
            lit: ColorSet::EMPTY,
            brightness,
            mirror_failures: 0,
        }
    }

    /// Aktuell leuchtende Farben
    pub fn lit(&self) -> ColorSet {
        self.lit
    }

    pub fn inner(&self) -> &L {
        &self.leds
    }

    pub fn status(&self) -> &W {
        &self.status
    }

    fn mirror(&mut self) {
        if self
            .status
            .write(mix_colors(self.lit, self.brightness))
            .is_err()
        {
            self.mirror_failures = self.mirror_failures.saturating_add(1);
        }
    }
}

impl<L: Leds, W: SmartLedWriter> Leds for MirroredLeds<L, W> {
    fn set(&mut self, color: Color, lit: bool) -> Result<(), LedError> {
        self.leds.set(color, lit)?;
        if lit {
            self.lit.insert(color);
        } else {
            self.lit.remove(color);
        }
        self.mirror();
        Ok(())
    }

    fn set_all(&mut self, lit: bool) -> Result<(), LedError> {
        let mut result = Ok(());
        let before = self.lit;
        for color in Color::ALL {
            if let Err(e) = self.leds.set(color, lit) {
                result = Err(e);
                break;
            }
            if lit {
                self.lit.insert(color);
            } else {
                self.lit.remove(color);
            }
        }
        // Auch nach einem Teil-Fehler zeigt die Status-LED den echten Zustand
        if result.is_ok() || self.lit != before {
            self.mirror();
        }
        result
    }

    /// Anzahl fehlgeschlagener Schreibzugriffe auf die Status-LED
    fn mirror_failures(&self) -> u32 {
        self.mirror_failures
    }
}
