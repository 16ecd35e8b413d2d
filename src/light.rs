//! Ambient-light boundary and the on-chip ADC implementation.

/// Ambient-light sensor read once per poll tick.
pub trait LightSensor {
    /// Raw sample, brighter is larger. Resolution is device-dependent; the
    /// brightness curve only cares about the magnitude.
    async fn read_raw(&mut self) -> u16;
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
mod adc {
    use embassy_rp::Peri;
    use embassy_rp::adc::{Adc, AdcPin, Async, Channel, Config, InterruptHandler};
    use embassy_rp::bind_interrupts;
    use embassy_rp::gpio::Pull;
    use embassy_rp::peripherals::ADC;

    use super::LightSensor;

    bind_interrupts!(pub struct AdcIrqs {
        ADC_IRQ_FIFO => InterruptHandler;
    });

    /// Photoresistor divider on an ADC pin.
    pub struct AdcLightSensor<'adc> {
        adc: Adc<'adc, Async>,
        channel: Channel<'adc>,
    }

    impl<'adc> AdcLightSensor<'adc> {
        #[must_use]
        pub fn new(adc: Peri<'adc, ADC>, pin: Peri<'adc, impl AdcPin>) -> Self {
            Self {
                adc: Adc::new(adc, AdcIrqs, Config::default()),
                channel: Channel::new_pin(pin, Pull::None),
            }
        }
    }

    impl LightSensor for AdcLightSensor<'_> {
        async fn read_raw(&mut self) -> u16 {
            // A transient conversion error reads as dark; the smoothing
            // window absorbs it.
            self.adc.read(&mut self.channel).await.unwrap_or(0)
        }
    }
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use adc::{AdcIrqs, AdcLightSensor};
