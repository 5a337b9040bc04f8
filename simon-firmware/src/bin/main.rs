// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Delay, Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::rmt::PulseCode;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_hal_smartled::smart_led_buffer;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::{error, info};

// Projekt-Module und Konfiguration
use esp_simon_says::config::{
    GAME_TIMING, LCD_I2C_ADDRESS, LCD_I2C_FREQUENCY_KHZ, RMT_CLOCK_MHZ, STATUS_LED_BRIGHTNESS,
    STATUS_LED_BUFFER_SIZE,
};
use esp_simon_says::hal::{RmtLedWriter, read_seed, seeded_rng};
use esp_simon_says::tasks::game_task;
use esp_simon_says::{
    GameController, Lcd1602, MirroredLeds, OptionalDisplay, PinButtons, PinLeds, Sequence,
};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, erzeugt die Sequenz, startet Embassy Runtime
/// und spawnt den Game Task. Danach schläft main().
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Simon Says booting");

    // Sequenz einmal pro Boot erzeugen (Seed aus analogem Rauschen)
    let seed = read_seed(peripherals.ADC1, peripherals.GPIO0);
    let mut rng = seeded_rng(seed);
    let sequence = Sequence::generate(&mut rng);

    // Spiel-LEDs: Rot, Blau, Grün, Gelb (aus beim Start)
    let led_pins = PinLeds::new([
        Output::new(peripherals.GPIO18, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO19, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO20, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO21, Level::Low, OutputConfig::default()),
    ]);

    // Status-LED: RMT Buffer muss 'static sein
    static RMT_BUFFER: static_cell::StaticCell<[PulseCode; STATUS_LED_BUFFER_SIZE]> =
        static_cell::StaticCell::new();
    let rmt_buffer = RMT_BUFFER.init(smart_led_buffer!(1));
    let status_led = RmtLedWriter::new(
        peripherals.GPIO8,
        peripherals.RMT,
        RMT_CLOCK_MHZ,
        rmt_buffer,
    );
    let leds = MirroredLeds::new(led_pins, status_led, STATUS_LED_BRIGHTNESS);

    // Taster: Pull-Up, LOW = gedrückt
    let button_config = InputConfig::default().with_pull(Pull::Up);
    let buttons = PinButtons::new([
        Input::new(peripherals.GPIO1, button_config),
        Input::new(peripherals.GPIO2, button_config),
        Input::new(peripherals.GPIO3, button_config),
        Input::new(peripherals.GPIO22, button_config),
    ]);

    // LCD 16x2 über PCF8574 an I2C0
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(LCD_I2C_FREQUENCY_KHZ)),
    )
    .expect("Failed to initialize I2C0")
    .with_sda(peripherals.GPIO6)
    .with_scl(peripherals.GPIO7);

    let mut lcd = Lcd1602::new(i2c, Delay, LCD_I2C_ADDRESS);
    // Ohne LCD ist das Spiel über die LEDs weiterhin spielbar
    let attached = match lcd.init() {
        Ok(()) => true,
        Err(e) => {
            error!("LCD init at 0x{:02x} failed: {}", LCD_I2C_ADDRESS, e);
            false
        }
    };
    let display = OptionalDisplay::new(lcd, attached);

    let controller = GameController::new(leds, buttons, display, Delay, sequence, GAME_TIMING);

    // Spawn Game Task
    spawner.spawn(game_task(controller)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Game Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
