use dx0960_common::{DeviceResources, ErrorKind};
use embedded_hal::digital::PinState;

use crate::{EventLog, HostEvent, SimBacklight, SimRegulator, SimResetPin};

/// 模拟宿主中的设备节点，默认是没有背光的正常 `dx,dx0960be40a1` 节点
pub struct SimResources {
    log: EventLog,
    compatible: String,
    missing_supplies: Vec<&'static str>,
    fail_enable: Vec<&'static str>,
    fail_disable: Vec<&'static str>,
    gpio_error: Option<ErrorKind>,
    backlight: bool,
    backlight_error: Option<ErrorKind>,
}

impl SimResources {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            compatible: String::from("dx,dx0960be40a1"),
            missing_supplies: Vec::new(),
            fail_enable: Vec::new(),
            fail_disable: Vec::new(),
            gpio_error: None,
            backlight: false,
            backlight_error: None,
        }
    }

    pub fn set_compatible(&mut self, compatible: &str) {
        self.compatible = String::from(compatible);
    }

    pub fn missing_supply(&mut self, name: &'static str) {
        self.missing_supplies.push(name);
    }

    pub fn fail_enable_of(&mut self, name: &'static str) {
        self.fail_enable.push(name);
    }

    pub fn fail_disable_of(&mut self, name: &'static str) {
        self.fail_disable.push(name);
    }

    pub fn gpio_error(&mut self, kind: ErrorKind) {
        self.gpio_error = Some(kind);
    }

    pub fn with_backlight(&mut self) {
        self.backlight = true;
    }

    pub fn backlight_error(&mut self, kind: ErrorKind) {
        self.backlight_error = Some(kind);
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }
}

impl DeviceResources for SimResources {
    type Regulator = SimRegulator;
    type Pin = SimResetPin;
    type Backlight = SimBacklight;

    fn compatible(&self) -> &str {
        &self.compatible
    }

    fn regulator(&mut self, supply: &'static str) -> Result<Self::Regulator, ErrorKind> {
        if self.missing_supplies.contains(&supply) {
            return Err(ErrorKind::NoDevice);
        }
        Ok(SimRegulator::new(supply, self.log.clone())
            .fail_enable(self.fail_enable.contains(&supply))
            .fail_disable(self.fail_disable.contains(&supply)))
    }

    fn gpio(&mut self, con_id: &'static str, initial: PinState) -> Result<Self::Pin, ErrorKind> {
        if let Some(kind) = self.gpio_error {
            return Err(kind);
        }
        self.log.push(HostEvent::GpioRequested { con_id, initial });
        Ok(SimResetPin::new(self.log.clone()))
    }

    fn backlight(&mut self) -> Result<Option<Self::Backlight>, ErrorKind> {
        if let Some(kind) = self.backlight_error {
            return Err(kind);
        }
        Ok(self
            .backlight
            .then(|| SimBacklight::new(self.log.clone())))
    }
}
