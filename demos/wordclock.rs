//! German word clock on a Pico: 11x10 WS2812 grid on GPIO4, push button on
//! GPIO13, photoresistor divider on ADC0 (GPIO26).

#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::pio::Pio;
use panic_probe as _;
use wortuhr::app::WordClock;
use wortuhr::button::Button;
use wortuhr::display::{Pio0Irqs, StripDisplay};
use wortuhr::grid::LED_COUNT;
use wortuhr::light::AdcLightSensor;
use wortuhr::rtc::SoftRtc;
use wortuhr::{MAX_CURRENT_MA, Never, Result};

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let err = inner_main().await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main() -> Result<Never> {
    info!("word clock starting");
    let hardware = embassy_rp::init(embassy_rp::config::Config::default());

    let Pio {
        mut common, sm0, ..
    } = Pio::new(hardware.PIO0, Pio0Irqs);
    let display = StripDisplay::new(
        &mut common,
        sm0,
        hardware.PIN_4,
        LED_COUNT,
        MAX_CURRENT_MA,
    );

    let sensor = AdcLightSensor::new(hardware.ADC, hardware.PIN_26);
    let mut button = Button::new(Input::new(hardware.PIN_13, Pull::Down));
    let clock = SoftRtc::new();

    WordClock::new(clock, display, sensor).run(&mut button).await
}
