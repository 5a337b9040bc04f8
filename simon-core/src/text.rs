//! Display-Texte (16 Zeichen pro Zeile)

pub const INTRO_LINE_1: &str = "Press buttons in";
pub const INTRO_LINE_2: &str = "the sequence!";

pub const WATCH: &str = "Watch the LEDs";
pub const YOUR_TURN: &str = "Your turn!";
pub const YOU_PRESSED: &str = "You pressed:";

pub const CORRECT: &str = "Correct!";
pub const INCORRECT: &str = "Incorrect!";
pub const TRY_AGAIN: &str = "Try again...";
