//! Core Types für das Simon-Says Spiel
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rand::{Rng, RngCore};
use rgb::RGB8;

/// Anzahl der Farben (LEDs und Taster)
pub const COLOR_COUNT: usize = 4;

/// Länge der Zielsequenz
pub const SEQ_LEN: usize = 4;

/// Spielfarbe
///
/// Der Index (0..4) ist gleichzeitig der Index in den Pin-Arrays
/// und die Scan-Reihenfolge der Taster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red = 0,
    Blue = 1,
    Green = 2,
    Yellow = 3,
}

impl Color {
    /// Alle Farben in Scan-Reihenfolge (Priorität bei gleichzeitigem Drücken)
    pub const ALL: [Color; COLOR_COUNT] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Text für Zeile 2 des Displays
    pub const fn label(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
        }
    }

    /// RGB-Wert für die Status-LED mit gegebener Helligkeit
    ///
    /// Gelb wird als Rot + Grün gemischt.
    pub const fn rgb(self, brightness: u8) -> RGB8 {
        match self {
            Color::Red => RGB8 {
                r: brightness,
                g: 0,
                b: 0,
            },
            Color::Blue => RGB8 {
                r: 0,
                g: 0,
                b: brightness,
            },
            Color::Green => RGB8 {
                r: 0,
                g: brightness,
                b: 0,
            },
            Color::Yellow => RGB8 {
                r: brightness,
                g: brightness,
                b: 0,
            },
        }
    }
}

/// Menge von Farben als 4-Bit-Maske
///
/// Wird für Taster-Schnappschüsse und leuchtende LEDs verwendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorSet {
    bits: u8,
}

impl ColorSet {
    pub const EMPTY: ColorSet = ColorSet { bits: 0 };
    pub const ALL: ColorSet = ColorSet { bits: 0b1111 };

    pub const fn single(color: Color) -> Self {
        Self {
            bits: 1 << color as u8,
        }
    }

    /// Builder-Variante von `insert()`
    pub const fn with(self, color: Color) -> Self {
        Self {
            bits: self.bits | 1 << color as u8,
        }
    }

    pub fn insert(&mut self, color: Color) {
        self.bits |= 1 << color as u8;
    }

    pub fn remove(&mut self, color: Color) {
        self.bits &= !(1 << color as u8);
    }

    pub const fn contains(self, color: Color) -> bool {
        self.bits & (1 << color as u8) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Erste enthaltene Farbe in Scan-Reihenfolge (Rot > Blau > Grün > Gelb)
    pub fn first(self) -> Option<Color> {
        self.iter().next()
    }

    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

/// Zielsequenz, einmal pro Boot erzeugt und danach unveränderlich
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sequence {
    colors: [Color; SEQ_LEN],
}

impl Sequence {
    /// Zieht SEQ_LEN unabhängige, gleichverteilte Farben
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use rand::rngs::mock::StepRng;
    /// # use simon_core::{Sequence, SEQ_LEN};
    /// let mut rng = StepRng::new(0, 1);
    /// let sequence = Sequence::generate(&mut rng);
    /// assert_eq!(sequence.len(), SEQ_LEN);
    /// ```
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut colors = [Color::Red; SEQ_LEN];
        for slot in colors.iter_mut() {
            *slot = Color::ALL[rng.gen_range(0..COLOR_COUNT)];
        }
        Self { colors }
    }

    pub const fn from_colors(colors: [Color; SEQ_LEN]) -> Self {
        Self { colors }
    }

    pub fn get(&self, position: usize) -> Option<Color> {
        self.colors.get(position).copied()
    }

    pub const fn len(&self) -> usize {
        SEQ_LEN
    }

    pub const fn is_empty(&self) -> bool {
        SEQ_LEN == 0
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }
}

/// Ergebnis einer fehlgeschlagenen Runde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mismatch {
    /// 0-basierte Position in der Sequenz
    pub position: usize,
    pub expected: Color,
    pub pressed: Color,
}

/// Zeitkonstanten des Spielablaufs (Millisekunden)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameTiming {
    /// Anzeigedauer des Begrüßungstexts vor der ersten Wiedergabe
    pub startup_ms: u32,
    /// LED an pro Sequenz-Eintrag
    pub flash_on_ms: u32,
    /// Pause nach jedem Eintrag
    pub flash_gap_ms: u32,
    /// Rückmeldung nach Tastendruck (zugleich Entprellung)
    pub feedback_ms: u32,
    /// Anzeige von "Incorrect!" vor der Wiederholung
    pub retry_pause_ms: u32,
    /// Abfrageintervall der Taster
    pub poll_interval_ms: u32,
}

impl Default for GameTiming {
    fn default() -> Self {
        Self {
            startup_ms: 1000,
            flash_on_ms: 500,
            flash_gap_ms: 250,
            feedback_ms: 300,
            retry_pause_ms: 1000,
            poll_interval_ms: 5,
        }
    }
}
