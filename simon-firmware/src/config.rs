// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// GPIO-Belegung (ESP32-C6-DevKitC-1):
//
// GPIO | Funktion          | Hinweis
// -----+-------------------+------------------------------
//  0   | ADC1 Rauschquelle | offen lassen (floating)
//  1   | Taster Rot        | gegen GND, interner Pull-Up
//  2   | Taster Blau       | gegen GND, interner Pull-Up
//  3   | Taster Grün       | gegen GND, interner Pull-Up
//  22  | Taster Gelb       | gegen GND, interner Pull-Up
//  18  | LED Rot           | HIGH = an
//  19  | LED Blau          | HIGH = an
//  20  | LED Grün          | HIGH = an
//  21  | LED Gelb          | HIGH = an
//  6   | I²C SDA (LCD)     | PCF8574 Backpack
//  7   | I²C SCL (LCD)     | PCF8574 Backpack
//  8   | WS2812 Status-LED | on-board
#![allow(dead_code)]

use simon_core::GameTiming;

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB Status-LED (WS2812/Neopixel)
pub const STATUS_LED_GPIO_PIN: u8 = 8;

/// Helligkeits-Level für die Status-LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const STATUS_LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// RMT Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
pub const STATUS_LED_BUFFER_SIZE: usize = 25;

// ============================================================================
// LCD Konfiguration
// ============================================================================

// LCD_I2C_ADDRESS wird von build.rs erzeugt (Default 0x27, Override via .env)
include!(concat!(env!("OUT_DIR"), "/lcd_address.rs"));

/// I²C Bus-Frequenz in kHz (PCF8574 kann max. 100 kHz)
pub const LCD_I2C_FREQUENCY_KHZ: u32 = 100;

// ============================================================================
// Spiel-Timing
// ============================================================================

/// Begrüßungstext vor der ersten Wiedergabe
pub const STARTUP_MS: u32 = 1000;

/// LED an pro Sequenz-Eintrag
pub const FLASH_ON_MS: u32 = 500;

/// Pause zwischen zwei Einträgen
pub const FLASH_GAP_MS: u32 = 250;

/// Anzeige "You pressed:" (zugleich Entprellung)
pub const FEEDBACK_MS: u32 = 300;

/// Anzeige "Incorrect!" bevor die Sequenz wiederholt wird
pub const RETRY_PAUSE_MS: u32 = 1000;

/// Abfrageintervall der Taster
pub const BUTTON_POLL_MS: u32 = 5;

/// Wartezeit nach einem Hardware-Fehler bevor der Schritt wiederholt wird
pub const ERROR_RETRY_DELAY_MS: u64 = 100;

/// Timing für den GameController
pub const GAME_TIMING: GameTiming = GameTiming {
    startup_ms: STARTUP_MS,
    flash_on_ms: FLASH_ON_MS,
    flash_gap_ms: FLASH_GAP_MS,
    feedback_ms: FEEDBACK_MS,
    retry_pause_ms: RETRY_PAUSE_MS,
    poll_interval_ms: BUTTON_POLL_MS,
};
