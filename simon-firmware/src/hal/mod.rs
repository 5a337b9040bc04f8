// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt die ESP32-spezifischen Hardware-Zugriffe.
// Traits und hardware-unabhängige Treiber liegen in simon-core.

pub mod led_writer;
pub mod noise;

pub use led_writer::RmtLedWriter;
pub use noise::{SeedSource, read_seed, seeded_rng};
