// Game Task - Treibt den GameController aus simon-core
use defmt::{error, info, warn};
use embassy_time::{Duration, Timer};
use embedded_hal_async::delay::DelayNs;

use simon_core::{Buttons, GameController, Leds, Phase, TextDisplay};

use crate::FirmwareController;
use crate::config::ERROR_RETRY_DELAY_MS;

/// Game Logic - Schrittweise Ausführung mit Logging
///
/// Diese Funktion enthält die komplette Ablaufsteuerung:
/// - Führt die Phasen des Controllers nacheinander aus
/// - Loggt jeden Phasenwechsel (inkl. falscher Taster)
/// - Loggt neue Schreibfehler der Status-LED sofort nach dem Schritt
/// - Wiederholt einen fehlgeschlagenen Schritt nach kurzer Pause
/// - Kehrt zurück, sobald das Spiel in `Phase::Halted` ist
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter erlauben echte Hardware im Production-Code
/// und Mocks in Host-Tests (siehe simon-tests).
pub async fn game_logic<L, B, D, T>(controller: &mut GameController<L, B, D, T>)
where
    L: Leds,
    B: Buttons,
    D: TextDisplay,
    T: DelayNs,
{
    info!("Sequence: {}", controller.sequence());
    let mut reported_failures = 0;

    while !controller.phase().is_halted() {
        match controller.step().await {
            Ok(Phase::Failed(mismatch)) => {
                warn!(
                    "Wrong button at position {}: expected {}, pressed {} (attempt {})",
                    mismatch.position + 1,
                    mismatch.expected,
                    mismatch.pressed,
                    controller.attempts()
                );
            }
            Ok(Phase::Halted) => {
                info!("Correct after {} attempt(s), halting", controller.attempts());
            }
            Ok(phase) => {
                info!("Phase: {}", phase);
            }
            Err(e) => {
                error!("Step in phase {} failed: {}", controller.phase(), e);
                Timer::after(Duration::from_millis(ERROR_RETRY_DELAY_MS)).await;
            }
        }

        let failures = controller.leds().mirror_failures();
        if failures != reported_failures {
            warn!("Status LED: {} failed write(s)", failures);
            reported_failures = failures;
        }
    }
}

/// Game Task - Embassy Task für das Spiel
///
/// Der Controller wird in main() mit der echten Hardware gebaut und hier
/// übergeben. Nach dem Sieg bleibt der Task inaktiv (Reset startet neu).
///
/// # Parameter
/// - `controller`: vollständig verdrahteter GameController
#[embassy_executor::task]
pub async fn game_task(mut controller: FirmwareController) {
    game_logic(&mut controller).await;

    let skipped = controller.display().skipped();
    if skipped > 0 {
        warn!("LCD missing: {} output(s) skipped", skipped);
    }

    // Endzustand: keine Eingaben mehr verarbeiten
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
