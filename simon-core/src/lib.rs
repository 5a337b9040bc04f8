//! Simon Core - Platform-agnostic Game Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Typen, Traits, die Spiellogik und einen LCD-Treiber,
//! der nur gegen die embedded-hal Traits programmiert ist.

#![no_std]

pub mod display;
pub mod game;
pub mod lcd;
pub mod logic;
pub mod pins;
pub mod text;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use display::OptionalDisplay;
pub use game::{GameController, InputOutcome, Phase};
pub use lcd::Lcd1602;
pub use logic::{MatchStep, SequenceMatcher, mix_colors};
pub use pins::{MirroredLeds, PinButtons, PinLeds};
pub use traits::{
    Buttons, DisplayError, GameError, InputError, LedError, Leds, SmartLedWriter, TextDisplay,
};
pub use types::{COLOR_COUNT, Color, ColorSet, GameTiming, Mismatch, SEQ_LEN, Sequence};
