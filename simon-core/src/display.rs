//! Display-Wrapper für ein evtl. fehlendes LCD
//!
//! Schlägt `init()` beim Boot fehl, wird das Display als nicht angeschlossen
//! markiert. Alle Ausgaben werden dann verworfen statt den Spielablauf mit
//! Bus-Fehlern zu blockieren; gespielt wird nur über die LEDs.

use crate::traits::{DisplayError, TextDisplay};

pub struct OptionalDisplay<D> {
    inner: D,
    attached: bool,
    skipped: u32,
}

impl<D: TextDisplay> OptionalDisplay<D> {
    pub fn new(inner: D, attached: bool) -> Self {
        Self {
            inner,
            attached,
            skipped: 0,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Anzahl verworfener Ausgaben
    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }

    fn forward(
        &mut self,
        op: impl FnOnce(&mut D) -> Result<(), DisplayError>,
    ) -> Result<(), DisplayError> {
        if self.attached {
            op(&mut self.inner)
        } else {
            self.skipped = self.skipped.saturating_add(1);
            Ok(())
        }
    }
}

impl<D: TextDisplay> TextDisplay for OptionalDisplay<D> {
    const ROWS: u8 = D::ROWS;
    const COLS: u8 = D::COLS;

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.forward(|d| d.clear())
    }

    fn print_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        self.forward(|d| d.print_at(row, col, text))
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.forward(|d| d.set_backlight(on))
    }
}
