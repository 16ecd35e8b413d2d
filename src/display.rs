//! Display boundary and the WS2812 strip driver.

use crate::error::Result;
use crate::render::FrameBuffer;

/// The LED strip as the rest of the clock sees it: linear offsets, one RGB
/// value per LED, a global brightness.
pub trait Display {
    /// Global brightness (0..=255) applied to subsequently shown frames.
    fn set_brightness(&mut self, level: u8);

    /// Push one full frame to the hardware.
    ///
    /// # Errors
    ///
    /// Propagates driver failures; the strip driver itself is infallible.
    async fn show(&mut self, frame: &FrameBuffer) -> Result<()>;
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
mod ws2812 {
    use embassy_rp::Peri;
    use embassy_rp::bind_interrupts;
    use embassy_rp::clocks::clk_sys_freq;
    use embassy_rp::peripherals::PIO0;
    use embassy_rp::pio::program::{Assembler, JmpCondition, OutDestination, SetDestination, SideSet};
    use embassy_rp::pio::{
        Common, Config, FifoJoin, Instance, InterruptHandler, LoadedProgram, PioPin, ShiftConfig,
        ShiftDirection, StateMachine,
    };
    use embassy_time::{Duration, Timer};
    use fixed::types::U24F8;
    use smart_leds::RGB8;

    use super::Display;
    use crate::error::Result;
    use crate::render::FrameBuffer;

    // WS2812 line timings in PIO cycles.
    const T1: u8 = 2;
    const T2: u8 = 5;
    const T3: u8 = 3;
    const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;
    /// Latch time after the last bit before the strip accepts a new frame.
    const RESET_DELAY: Duration = Duration::from_micros(55);
    /// Worst-case draw of one LED at full white, in milliamps.
    const FULL_WHITE_MA: u32 = 60;

    bind_interrupts!(pub struct Pio0Irqs {
        PIO0_IRQ_0 => InterruptHandler<PIO0>;
    });

    /// WS2812 bit engine: 24 bits per LED, MSB first, GRB order.
    fn load_ws2812_program<'pio, P: Instance>(
        common: &mut Common<'pio, P>,
    ) -> LoadedProgram<'pio, P> {
        let side_set = SideSet::new(false, 1, false);
        let mut assembler = Assembler::<32>::new_with_side_set(side_set);

        let mut wrap_target = assembler.label();
        let mut wrap_source = assembler.label();
        let mut do_zero = assembler.label();
        assembler.set_with_side_set(SetDestination::PINDIRS, 1, 0);
        assembler.bind(&mut wrap_target);
        // stop bit
        assembler.out_with_delay_and_side_set(OutDestination::X, 1, T3 - 1, 0);
        // start bit
        assembler.jmp_with_delay_and_side_set(JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
        // one bit
        assembler.jmp_with_delay_and_side_set(JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
        assembler.bind(&mut do_zero);
        // zero bit
        assembler.nop_with_delay_and_side_set(T2 - 1, 0);
        assembler.bind(&mut wrap_source);

        let program = assembler.assemble_with_wrap(wrap_source, wrap_target);
        common.load_program(&program)
    }

    /// The shift register wants GRB, most significant bit first.
    fn pack_grb(color: RGB8) -> u32 {
        (u32::from(color.g) << 24) | (u32::from(color.r) << 16) | (u32::from(color.b) << 8)
    }

    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "the u8 product fits u16 and 255 is nonzero"
    )]
    fn scale(value: u8, brightness: u8) -> u8 {
        ((u16::from(value) * u16::from(brightness)) / 255) as u8
    }

    /// Brightness ceiling that keeps a full-white frame inside the supply's
    /// current budget.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "the strip length is fixed and small; the products fit u32"
    )]
    const fn brightness_cap(len: usize, max_current_ma: u32) -> u8 {
        let full_white = len as u32 * FULL_WHITE_MA;
        let cap = max_current_ma * 255 / full_white;
        if cap > 255 { 255 } else { cap as u8 }
    }

    /// CPU-fed PIO driver for the word-clock strip, with a global brightness
    /// scale and a current-budget cap.
    pub struct StripDisplay<'pio, P: Instance, const SM: usize> {
        sm: StateMachine<'pio, P, SM>,
        brightness: u8,
        cap: u8,
    }

    impl<'pio, P: Instance, const SM: usize> StripDisplay<'pio, P, SM> {
        #[expect(
            clippy::arithmetic_side_effects,
            reason = "clk_sys_freq is megahertz-scale; the divider math cannot overflow U24F8"
        )]
        pub fn new(
            common: &mut Common<'pio, P>,
            mut sm: StateMachine<'pio, P, SM>,
            pin: Peri<'pio, impl PioPin>,
            led_count: usize,
            max_current_ma: u32,
        ) -> Self {
            let program = load_ws2812_program(common);

            let mut cfg = Config::default();
            let out_pin = common.make_pio_pin(pin);
            cfg.set_out_pins(&[&out_pin]);
            cfg.set_set_pins(&[&out_pin]);
            cfg.use_program(&program, &[&out_pin]);

            // 800 kHz bit rate.
            let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
            let bit_freq = U24F8::from_num(800) * CYCLES_PER_BIT;
            cfg.clock_divider = clock_freq / bit_freq;

            cfg.fifo_join = FifoJoin::TxOnly;
            cfg.shift_out = ShiftConfig {
                auto_fill: true,
                threshold: 24,
                direction: ShiftDirection::Left,
            };
            sm.set_config(&cfg);
            sm.set_enable(true);

            Self {
                sm,
                brightness: 0,
                cap: brightness_cap(led_count, max_current_ma),
            }
        }
    }

    impl<P: Instance, const SM: usize> Display for StripDisplay<'_, P, SM> {
        fn set_brightness(&mut self, level: u8) {
            self.brightness = if level > self.cap { self.cap } else { level };
        }

        async fn show(&mut self, frame: &FrameBuffer) -> Result<()> {
            let brightness = self.brightness;
            let tx = self.sm.tx();
            for color in frame.iter() {
                let scaled = RGB8::new(
                    scale(color.r, brightness),
                    scale(color.g, brightness),
                    scale(color.b, brightness),
                );
                tx.wait_push(pack_grb(scaled)).await;
            }
            Timer::after(RESET_DELAY).await;
            Ok(())
        }
    }
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use ws2812::{Pio0Irqs, StripDisplay};
