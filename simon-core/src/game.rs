//! Game Controller - Zustandsautomat des Spiels
//!
//! Der Controller besitzt Sequenz, LEDs, Taster, Display und Delay.
//! Jeder Aufruf von `step()` führt die Aktion der aktuellen Phase aus
//! und wechselt erst bei Erfolg in die nächste Phase. Ein fehlgeschlagener
//! Schritt (Hardware-Fehler) kann deshalb einfach wiederholt werden.
//!
//! ```text
//! Intro → Playback → Collection ─┬→ Won → Halted
//!            ↑                   └→ Failed ─┐
//!            └──────────────────────────────┘
//! ```

use embedded_hal_async::delay::DelayNs;

use crate::logic::{MatchStep, SequenceMatcher};
use crate::text;
use crate::traits::{Buttons, GameError, Leds, TextDisplay};
use crate::types::{Color, GameTiming, Mismatch, Sequence};

/// Spielphase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Begrüßungstext nach dem Boot
    Intro,
    /// Sequenz wird über die LEDs gezeigt
    Playback,
    /// Spieler gibt die Sequenz ein
    Collection,
    /// Sequenz korrekt eingegeben
    Won,
    /// Falscher Taster, Sequenz wird wiederholt
    Failed(Mismatch),
    /// Endzustand: alle LEDs an, keine Eingaben mehr (nur Reset hilft)
    Halted,
}

impl Phase {
    pub fn is_halted(&self) -> bool {
        matches!(self, Phase::Halted)
    }
}

/// Ergebnis einer Eingabe-Runde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputOutcome {
    Matched,
    Mismatch(Mismatch),
}

pub struct GameController<L, B, D, T> {
    leds: L,
    buttons: B,
    display: D,
    delay: T,
    sequence: Sequence,
    timing: GameTiming,
    phase: Phase,
    attempts: u32,
    /// Bereits richtig eingegebene Positionen der laufenden Runde
    progress: usize,
    /// Gelesener, aber noch nicht ausgewerteter Tastendruck
    pending: Option<Color>,
}

impl<L, B, D, T> GameController<L, B, D, T>
where
    L: Leds,
    B: Buttons,
    D: TextDisplay,
    T: DelayNs,
{
    pub fn new(
        leds: L,
        buttons: B,
        display: D,
        delay: T,
        sequence: Sequence,
        timing: GameTiming,
    ) -> Self {
        Self {
            leds,
            buttons,
            display,
            delay,
            sequence,
            timing,
            phase: Phase::Intro,
            attempts: 0,
            progress: 0,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Anzahl abgeschlossener Eingabe-Runden
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Position, an der eine unterbrochene Eingabe fortgesetzt wird
    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }

    pub fn buttons(&self) -> &B {
        &self.buttons
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn delay(&self) -> &T {
        &self.delay
    }

    /// Führt die Aktion der aktuellen Phase aus und gibt die neue Phase zurück
    pub async fn step(&mut self) -> Result<Phase, GameError> {
        let next = match self.phase {
            Phase::Intro => {
                self.intro().await?;
                Phase::Playback
            }
            Phase::Playback => {
                self.flash_sequence().await?;
                Phase::Collection
            }
            Phase::Collection => {
                let outcome = self.collect_input().await?;
                self.attempts = self.attempts.saturating_add(1);
                match outcome {
                    InputOutcome::Matched => Phase::Won,
                    InputOutcome::Mismatch(mismatch) => Phase::Failed(mismatch),
                }
            }
            Phase::Won => {
                self.display.show(text::CORRECT, None)?;
                self.leds.set_all(true)?;
                Phase::Halted
            }
            Phase::Failed(_) => {
                self.display.show(text::INCORRECT, Some(text::TRY_AGAIN))?;
                self.delay.delay_ms(self.timing.retry_pause_ms).await;
                // Gleiche Sequenz, keine Neuerzeugung
                Phase::Playback
            }
            Phase::Halted => Phase::Halted,
        };
        self.phase = next;
        Ok(next)
    }

    /// Läuft bis `Phase::Halted`; bei einem Fehler bleibt die Phase erhalten
    pub async fn run(&mut self) -> Result<(), GameError> {
        while !self.phase.is_halted() {
            self.step().await?;
        }
        Ok(())
    }

    async fn intro(&mut self) -> Result<(), GameError> {
        self.leds.set_all(false)?;
        self.display.set_backlight(true)?;
        self.display.show(text::INTRO_LINE_1, Some(text::INTRO_LINE_2))?;
        self.delay.delay_ms(self.timing.startup_ms).await;
        Ok(())
    }

    /// Zeigt die Sequenz: immer genau eine LED an, Farbe in Zeile 2
    pub async fn flash_sequence(&mut self) -> Result<(), GameError> {
        self.display.show(text::WATCH, None)?;

        for color in self.sequence.iter() {
            self.leds.set(color, true)?;
            self.display.print_line(1, color.label())?;
            self.delay.delay_ms(self.timing.flash_on_ms).await;
            self.leds.set(color, false)?;
            self.delay.delay_ms(self.timing.flash_gap_ms).await;
        }

        self.display.show(text::YOUR_TURN, None)?;
        Ok(())
    }

    /// Sammelt Tastendrücke und bricht beim ersten falschen sofort ab
    ///
    /// Bricht ein Hardware-Fehler die Runde ab, setzt der nächste Aufruf an
    /// derselben Position fort; ein bereits gelesener Druck geht nicht verloren.
    pub async fn collect_input(&mut self) -> Result<InputOutcome, GameError> {
        let sequence = self.sequence;
        let mut matcher = SequenceMatcher::resume(&sequence, self.progress);

        loop {
            let pressed = match self.pending {
                Some(color) => color,
                None => {
                    let color = self.wait_for_press().await?;
                    self.pending = Some(color);
                    color
                }
            };

            self.display.show(text::YOU_PRESSED, Some(pressed.label()))?;
            self.delay.delay_ms(self.timing.feedback_ms).await;
            self.pending = None;

            match matcher.press(pressed) {
                MatchStep::Advance { next } => self.progress = next,
                MatchStep::Complete => {
                    self.progress = 0;
                    return Ok(InputOutcome::Matched);
                }
                MatchStep::Mismatch(mismatch) => {
                    self.progress = 0;
                    return Ok(InputOutcome::Mismatch(mismatch));
                }
            }
        }
    }

    /// Blockiert ohne Timeout bis ein Taster gedrückt ist
    ///
    /// Bei mehreren gleichzeitig gedrückten Tastern gewinnt die
    /// Scan-Reihenfolge Rot > Blau > Grün > Gelb.
    async fn wait_for_press(&mut self) -> Result<Color, GameError> {
        loop {
            if let Some(color) = self.buttons.read()?.first() {
                return Ok(color);
            }
            self.delay.delay_ms(self.timing.poll_interval_ms).await;
        }
    }
}
