//! Mock-Hardware für die Host-Tests
//!
//! Jede Test-Binary bindet dieses Modul ein und nutzt nur einen Teil davon.
#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use rgb::RGB8;
use simon_core::{
    Buttons, Color, ColorSet, DisplayError, GameController, GameTiming, InputError, LedError,
    Leds, Sequence, SmartLedWriter, TextDisplay,
};

// ============================================================================
// Mock LED Writer (Status-LED)
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    pub last_color: Option<RGB8>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_color = Some(color);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Spiel-LEDs
// ============================================================================

#[derive(Default)]
pub struct MockLeds {
    pub lit: ColorSet,
    /// Alle set()-Aufrufe in Reihenfolge
    pub events: Vec<(Color, bool)>,
    /// Maximale Anzahl gleichzeitig leuchtender LEDs
    pub max_lit: usize,
    pub fail_next: bool,
    /// Schlägt fehl, sobald so viele set()-Aufrufe erfolgreich waren
    pub fail_after: Option<usize>,
}

impl MockLeds {
    /// Nur die Einschalt-Ereignisse (Reihenfolge der Wiedergabe)
    pub fn turned_on(&self) -> Vec<Color> {
        self.events
            .iter()
            .filter(|(_, lit)| *lit)
            .map(|(c, _)| *c)
            .collect()
    }
}

impl Leds for MockLeds {
    fn set(&mut self, color: Color, lit: bool) -> Result<(), LedError> {
        if self.fail_next || self.fail_after == Some(self.events.len()) {
            self.fail_next = false;
            self.fail_after = None;
            return Err(LedError::WriteFailed);
        }
        if lit {
            self.lit.insert(color);
        } else {
            self.lit.remove(color);
        }
        self.events.push((color, lit));
        self.max_lit = self.max_lit.max(self.lit.len());
        Ok(())
    }
}

// ============================================================================
// Skriptgesteuerte Taster
// ============================================================================

/// Liefert pro read() den nächsten Schnappschuss aus dem Skript
///
/// Ist das Skript leer, schlägt der Test fehl: der Controller hat dann
/// mehr Eingaben gelesen als vorgesehen.
#[derive(Default)]
pub struct ScriptedButtons {
    script: VecDeque<ColorSet>,
    pub reads: usize,
    /// Nächster read() schlägt fehl, ohne das Skript zu verbrauchen
    pub fail_next: bool,
}

impl ScriptedButtons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ein Tastendruck pro Farbe, jeweils mit zwei leeren Abfragen davor
    pub fn presses(colors: &[Color]) -> Self {
        let mut buttons = Self::new();
        for color in colors {
            buttons = buttons.idle(2).press(*color);
        }
        buttons
    }

    pub fn idle(mut self, polls: usize) -> Self {
        for _ in 0..polls {
            self.script.push_back(ColorSet::EMPTY);
        }
        self
    }

    pub fn press(self, color: Color) -> Self {
        self.press_set(ColorSet::single(color))
    }

    pub fn press_set(mut self, set: ColorSet) -> Self {
        self.script.push_back(set);
        self
    }

    pub fn then(mut self, other: ScriptedButtons) -> Self {
        self.script.extend(other.script);
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Buttons for ScriptedButtons {
    fn read(&mut self) -> Result<ColorSet, InputError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(InputError::ReadFailed);
        }
        self.reads += 1;
        match self.script.pop_front() {
            Some(set) => Ok(set),
            None => panic!("button script exhausted after {} reads", self.reads),
        }
    }
}

// ============================================================================
// Mock Display
// ============================================================================

const COLS: usize = 16;

pub struct MockDisplay {
    rows: [Vec<char>; 2],
    pub backlight: bool,
    pub clears: usize,
    /// Alle print_at()-Aufrufe (row, col, text)
    pub prints: Vec<(u8, u8, String)>,
    /// Bildschirminhalt nach jeder Operation
    pub history: Vec<[String; 2]>,
    /// Nächste Operation schlägt mit einem Bus-Fehler fehl
    pub fail_next: bool,
    /// Der n-te clear()-Aufruf (1-basiert) schlägt fehl
    pub fail_on_clear: Option<usize>,
    clear_calls: usize,
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self {
            rows: [vec![' '; COLS], vec![' '; COLS]],
            backlight: false,
            clears: 0,
            prints: Vec::new(),
            history: Vec::new(),
            fail_next: false,
            fail_on_clear: None,
            clear_calls: 0,
        }
    }
}

impl MockDisplay {
    /// Zeile inkl. Leerzeichen am Ende
    pub fn raw_line(&self, row: usize) -> String {
        self.rows[row].iter().collect()
    }

    pub fn line(&self, row: usize) -> String {
        self.raw_line(row).trim_end().to_string()
    }

    /// Wurde dieser Bildschirm (ohne Leerzeichen am Ende) jemals angezeigt?
    pub fn showed(&self, line1: &str, line2: &str) -> bool {
        self.history
            .iter()
            .any(|[a, b]| a.trim_end() == line1 && b.trim_end() == line2)
    }

    fn check_fail(&mut self) -> Result<(), DisplayError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(DisplayError::Bus);
        }
        Ok(())
    }

    fn snapshot(&mut self) {
        let snapshot = [self.raw_line(0), self.raw_line(1)];
        self.history.push(snapshot);
    }
}

impl TextDisplay for MockDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.check_fail()?;
        self.clear_calls += 1;
        if self.fail_on_clear == Some(self.clear_calls) {
            return Err(DisplayError::Bus);
        }
        self.rows = [vec![' '; COLS], vec![' '; COLS]];
        self.clears += 1;
        self.snapshot();
        Ok(())
    }

    fn print_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        self.check_fail()?;
        if row >= Self::ROWS || col >= Self::COLS {
            return Err(DisplayError::OutOfBounds);
        }
        let line = &mut self.rows[row as usize];
        for (i, c) in text.chars().take(COLS - col as usize).enumerate() {
            line[col as usize + i] = c;
        }
        self.prints.push((row, col, text.to_string()));
        self.snapshot();
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.check_fail()?;
        self.backlight = on;
        Ok(())
    }
}

// ============================================================================
// Mock Delays
// ============================================================================

/// Async Delay: kehrt sofort zurück und summiert die Wartezeit
#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl MockDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// Blockierender Delay für den LCD-Treiber
#[derive(Default)]
pub struct BlockingDelay {
    pub total_ns: u64,
}

impl embedded_hal::delay::DelayNs for BlockingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

// ============================================================================
// Mock I²C
// ============================================================================

#[derive(Default)]
pub struct MockI2c {
    /// (Adresse, Bytes) pro Schreibzugriff
    pub writes: Vec<(u8, Vec<u8>)>,
    pub fail: bool,
}

impl MockI2c {
    /// Alle geschriebenen Bytes hintereinander
    pub fn bytes(&self) -> Vec<u8> {
        self.writes.iter().flat_map(|(_, b)| b.clone()).collect()
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                Operation::Read(buf) => buf.fill(0),
            }
        }
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub type TestController = GameController<MockLeds, ScriptedButtons, MockDisplay, MockDelay>;

pub fn controller(sequence: [Color; 4], buttons: ScriptedButtons) -> TestController {
    GameController::new(
        MockLeds::default(),
        buttons,
        MockDisplay::default(),
        MockDelay::default(),
        Sequence::from_colors(sequence),
        GameTiming::default(),
    )
}
