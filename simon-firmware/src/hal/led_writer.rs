// SmartLED Writer für die on-board Status-LED
//
// Implementiert den SmartLedWriter-Trait aus simon-core über das RMT Peripheral.
// Mock-Implementierung für Host-Tests liegt in simon-tests.

use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use simon_core::{LedError, SmartLedWriter};

use crate::config::STATUS_LED_BUFFER_SIZE;

/// Real Hardware LED Writer
///
/// Nutzt ESP32 RMT Peripheral um die WS2812 Status-LED anzusteuern.
///
/// Hinweis: Der Buffer muss so lange leben wie der Writer. Er wird in
/// main() über eine StaticCell angelegt und als `'static` übergeben.
pub struct RmtLedWriter<'a> {
    led: SmartLedsAdapter<'a, STATUS_LED_BUFFER_SIZE>,
}

impl<'a> RmtLedWriter<'a> {
    /// Erstellt einen neuen RmtLedWriter
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(1) Macro)
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [PulseCode; STATUS_LED_BUFFER_SIZE],
    ) -> Self {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .expect("RMT Initialisierung fehlgeschlagen");

        // SmartLED Adapter erstellen
        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Self { led }
    }
}

impl<'a> SmartLedWriter for RmtLedWriter<'a> {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        self.led
            .write([color].into_iter())
            .map_err(|_| LedError::WriteFailed)
    }
}
