// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

use std::fs;
use std::path::PathBuf;

/// Standard-Adresse des PCF8574 LCD-Backpacks
const DEFAULT_LCD_I2C_ADDRESS: u8 = 0x27;

fn main() {
    // Lade .env file für optionale Hardware-Overrides
    // Fehler ignorieren wenn .env nicht existiert (dann gelten die Defaults)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("ℹ️  .env file nicht gefunden: {}", e);
        eprintln!("   LCD_I2C_ADDRESS = 0x{:02X} (Default)", DEFAULT_LCD_I2C_ADDRESS);
    }
    println!("cargo:rerun-if-env-changed=LCD_I2C_ADDRESS");
    println!("cargo:rerun-if-changed=.env");

    // LCD-Adresse zur Compile-Zeit einbacken
    // Manche Backpacks nutzen 0x3F statt 0x27
    let address = match std::env::var("LCD_I2C_ADDRESS") {
        Ok(raw) => parse_address(&raw).unwrap_or_else(|| {
            panic!("LCD_I2C_ADDRESS ungültig: {raw:?} (erwartet z.B. 0x27 oder 39, max. 0x7F)")
        }),
        Err(_) => DEFAULT_LCD_I2C_ADDRESS,
    };
    write_lcd_address(address);

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen (sonst Probleme mit flip-link)
    //    Definiert Flash/RAM-Layout und Startup-Code
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

/// Akzeptiert "0x27", "0X3f" oder dezimal "39"; nur 7-Bit Adressen
fn parse_address(raw: &str) -> Option<u8> {
    let raw = raw.trim();
    let value = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16).ok()?,
        None => raw.parse::<u8>().ok()?,
    };
    (value <= 0x7F).then_some(value)
}

/// Schreibt `lcd_address.rs` nach OUT_DIR (wird von config.rs inkludiert)
fn write_lcd_address(address: u8) {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR nicht gesetzt"));
    let contents = format!(
        "/// I²C-Adresse des LCD-Backpacks (build.rs, LCD_I2C_ADDRESS)\n\
         pub const LCD_I2C_ADDRESS: u8 = 0x{address:02X};\n"
    );
    fs::write(out_dir.join("lcd_address.rs"), contents).expect("lcd_address.rs schreiben");
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        match kind.as_str() {
            // Undefiniertes Symbol gefunden
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and you have included `use esp_println as _;`"
                    );
                    eprintln!();
                }
                "_stack_start" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                }
                what if what.starts_with("esp_rtos_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `esp-rtos` is not started. Make sure `esp_rtos::start()` is called before spawning tasks."
                    );
                    eprintln!();
                }
                _ => (),
            },
            // we don't have anything helpful for "missing-lib" yet
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
