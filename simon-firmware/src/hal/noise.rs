// Zufalls-Seed aus analogem Rauschen
//
// Ein offener ADC-Eingang liefert genug Rauschen, damit sich die Sequenz
// von Boot zu Boot unterscheidet. Pro Boot wird genau einmal gelesen.

use defmt::{info, warn};
use esp_hal::analog::adc::{Adc, AdcConfig, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO0};
use esp_hal::rng::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Woher der Seed stammt (für das Boot-Log)
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum SeedSource {
    /// ADC1 Oneshot-Messung am offenen Pin
    AnalogNoise(u16),
    /// Fallback: Hardware-RNG, falls der ADC nicht lesbar war
    HardwareRng(u32),
}

impl SeedSource {
    pub fn seed(self) -> u64 {
        match self {
            SeedSource::AnalogNoise(sample) => u64::from(sample),
            SeedSource::HardwareRng(value) => u64::from(value),
        }
    }
}

/// Liest einmal den offenen ADC-Pin
pub fn read_seed(adc1: ADC1<'_>, pin: GPIO0<'_>) -> SeedSource {
    let mut config = AdcConfig::new();
    let mut noise_pin = config.enable_pin(pin, Attenuation::_11dB);
    let mut adc = Adc::new(adc1, config);

    match nb::block!(adc.read_oneshot(&mut noise_pin)) {
        Ok(sample) => SeedSource::AnalogNoise(sample),
        Err(_) => {
            warn!("ADC read failed, falling back to hardware RNG");
            SeedSource::HardwareRng(Rng::new().random())
        }
    }
}

/// Erstellt den Zufallsgenerator für die Sequenz
pub fn seeded_rng(source: SeedSource) -> SmallRng {
    info!("Random seed: {}", source);
    SmallRng::seed_from_u64(source.seed())
}
