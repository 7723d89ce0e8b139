use dx0960_common as dxc;
use dxc::{DeviceResources, PanelError, PanelResult, ResetPolarity};
use embedded_hal::digital::{OutputPin, PinState};

/// 带极性的复位线
///
/// `assert` 输出有效电平，`deassert` 输出无效电平，与 `gpiod_set_value`
/// 的逻辑值语义相同。
pub struct ResetLine<P> {
    pin: P,
    polarity: ResetPolarity,
}

impl<P: OutputPin> ResetLine<P> {
    pub fn new(pin: P, polarity: ResetPolarity) -> Self {
        Self { pin, polarity }
    }

    /// 从 `resources` 申请 `con_id` GPIO，初始为无效电平
    pub fn get<D>(
        resources: &mut D,
        con_id: &'static str,
        polarity: ResetPolarity,
    ) -> PanelResult<Self>
    where
        D: DeviceResources<Pin = P>,
    {
        let initial = Self::level(polarity, false);
        let pin = resources.gpio(con_id, initial).map_err(|kind| {
            dxc::error!("Couldn't get our {} GPIO: {}", con_id, kind);
            PanelError::GpioGet { con_id, kind }
        })?;
        Ok(Self::new(pin, polarity))
    }

    pub fn assert(&mut self) -> PanelResult<()> {
        self.set(true)
    }

    pub fn deassert(&mut self) -> PanelResult<()> {
        self.set(false)
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    fn set(&mut self, asserted: bool) -> PanelResult<()> {
        self.pin
            .set_state(Self::level(self.polarity, asserted))
            .map_err(|e| PanelError::Gpio(dxc::digital_error_kind(&e)))
    }

    fn level(polarity: ResetPolarity, asserted: bool) -> PinState {
        match polarity {
            ResetPolarity::ActiveHigh => PinState::from(asserted),
            ResetPolarity::ActiveLow => PinState::from(!asserted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};

    #[test]
    fn active_high_drives_logical_level() {
        let expectations = [
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
        ];
        let mut pin = PinMock::new(&expectations);

        let mut reset = ResetLine::new(pin.clone(), ResetPolarity::ActiveHigh);
        reset.assert().unwrap();
        reset.deassert().unwrap();

        pin.done();
    }

    #[test]
    fn active_low_inverts() {
        let expectations = [
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ];
        let mut pin = PinMock::new(&expectations);

        let mut reset = ResetLine::new(pin.clone(), ResetPolarity::ActiveLow);
        reset.assert().unwrap();
        reset.deassert().unwrap();

        pin.done();
    }
}
