//! bordtennis - table-tennis scoreboard firmware for nRF52840.
//!
//! UP scores for player 1, DOWN for player 2 (both repeat while held),
//! holding SELECT for three seconds resets the match. The score is shown
//! on an SSD1306 OLED and kept in internal flash across power cycles.

#![no_std]
#![no_main]

mod storage;
mod ui;

use bordtennis::persist::StoredScores;
use bordtennis::score::{PointOutcome, Scoreboard};
use bordtennis::ui::input_logic::dispatch;
use bordtennis::ui::text::ScoreLines;
use bordtennis::{config, error};
use defmt::{error, info, warn};
use embassy_embedded_hal::adapter::BlockingAsync;
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::{bind_interrupts, peripherals, twim};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use crate::ui::buttons::{button_task, ButtonSender};
use crate::ui::display::{self, Display};
use crate::ui::ButtonEvent;

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Button events flowing from the button tasks to the main loop.
static BUTTON_CHANNEL: Channel<
    CriticalSectionRawMutex,
    ButtonEvent,
    { config::BUTTON_CHANNEL_CAPACITY },
> = Channel::new();

#[embassy_executor::task(pool_size = 3)]
async fn button(pin: AnyPin, event: ButtonEvent, tx: ButtonSender) -> ! {
    button_task(pin, event, tx).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("bordtennis starting");

    // Score storage
    let mut flash = BlockingAsync::new(Nvmc::new(p.NVMC));
    let mut store = StoredScores::new();
    storage::load_from_flash(&mut store, &mut flash).await;
    let mut scoreboard = Scoreboard::load(&store);
    info!("Restored match: {}", scoreboard.snapshot());

    // Display
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut oled = match display::init(i2c) {
        Ok(d) => Some(d),
        Err(e) => {
            // Keep scoring and saving without a screen.
            error!("Display init failed: {}", e);
            None
        }
    };
    redraw(&mut oled, &scoreboard);

    // Buttons
    let buttons = [
        (p.P0_11.degrade(), ButtonEvent::Up),
        (p.P0_12.degrade(), ButtonEvent::Down),
        (p.P0_24.degrade(), ButtonEvent::Select),
    ];
    for (pin, event) in buttons {
        if let Err(e) = spawner.spawn(button(pin, event, BUTTON_CHANNEL.sender())) {
            error!("Failed to spawn button task {}: {:?}", event, e);
        }
    }
    let rx = BUTTON_CHANNEL.receiver();

    loop {
        let idle = Timer::after(Duration::from_millis(config::SAVE_IDLE_MS));
        match select(rx.receive(), idle).await {
            Either::First(event) => {
                match dispatch(&mut scoreboard, event.action()) {
                    Some(PointOutcome::SetWon(player)) => {
                        info!("Set won by {}: {}", player, scoreboard.snapshot())
                    }
                    Some(PointOutcome::Point) => {}
                    None => info!("Match reset"),
                }
                redraw(&mut oled, &scoreboard);
            }
            Either::Second(()) => {
                scoreboard.save(&mut store);
                if let Err(e) = storage::save_to_flash(&mut store, &mut flash).await {
                    warn!("Score not saved, retrying after next idle period: {}", e);
                }
            }
        }
    }
}

fn redraw<I2C>(oled: &mut Option<Display<I2C>>, scoreboard: &Scoreboard)
where
    I2C: embedded_hal::i2c::I2c,
{
    let Some(screen) = oled.as_mut() else {
        return;
    };
    let result = ScoreLines::new(&scoreboard.snapshot())
        .and_then(|lines| display::draw_scoreboard(screen, &lines));
    if let Err(e) = result {
        error!("Display update failed: {}", e);
    }
}
