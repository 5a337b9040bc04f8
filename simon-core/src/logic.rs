//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::{Color, ColorSet, Mismatch, SEQ_LEN, Sequence};

/// Mischt alle leuchtenden Farben additiv zu einer RGB-Farbe
///
/// Kanäle sättigen bei 255. Keine Farbe ergibt Schwarz.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use simon_core::{mix_colors, Color, ColorSet};
/// let lit = ColorSet::single(Color::Red).with(Color::Blue);
/// assert_eq!(mix_colors(lit, 10), RGB8 { r: 10, g: 0, b: 10 });
/// ```
pub fn mix_colors(lit: ColorSet, brightness: u8) -> RGB8 {
    lit.iter()
        .map(|c| c.rgb(brightness))
        .fold(RGB8::default(), |acc, c| RGB8 {
            r: acc.r.saturating_add(c.r),
            g: acc.g.saturating_add(c.g),
            b: acc.b.saturating_add(c.b),
        })
}

/// Ergebnis eines einzelnen Tastendrucks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatchStep {
    /// Richtig, als nächstes wird Position `next` erwartet
    Advance { next: usize },
    /// Letzte Position richtig, Sequenz vollständig
    Complete,
    /// Falsche Farbe, Runde verloren
    Mismatch(Mismatch),
}

/// Vergleicht Tastendrücke Schritt für Schritt mit der Zielsequenz
///
/// `AwaitingPress(i) → {Advance(i+1) | Complete | Mismatch}`.
/// Nach `Complete` oder `Mismatch` ist der Matcher verbraucht und
/// meldet für jeden weiteren Druck das gleiche Ergebnis erneut.
pub struct SequenceMatcher<'a> {
    sequence: &'a Sequence,
    position: usize,
    finished: Option<MatchStep>,
}

impl<'a> SequenceMatcher<'a> {
    pub fn new(sequence: &'a Sequence) -> Self {
        Self {
            sequence,
            position: 0,
            finished: None,
        }
    }

    /// Setzt eine unterbrochene Eingabe an `position` fort
    ///
    /// Die Positionen davor gelten als bereits richtig gedrückt.
    pub fn resume(sequence: &'a Sequence, position: usize) -> Self {
        Self {
            sequence,
            position: position.min(SEQ_LEN),
            finished: None,
        }
    }

    /// Aktuell erwartete Position (0-basiert)
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    pub fn press(&mut self, pressed: Color) -> MatchStep {
        if let Some(result) = self.finished {
            return result;
        }

        // position < SEQ_LEN solange nicht finished
        let Some(expected) = self.sequence.get(self.position) else {
            self.finished = Some(MatchStep::Complete);
            return MatchStep::Complete;
        };

        if pressed != expected {
            let result = MatchStep::Mismatch(Mismatch {
                position: self.position,
                expected,
                pressed,
            });
            self.finished = Some(result);
            return result;
        }

        self.position += 1;
        if self.position == SEQ_LEN {
            self.finished = Some(MatchStep::Complete);
            MatchStep::Complete
        } else {
            MatchStep::Advance {
                next: self.position,
            }
        }
    }
}
