use dx0960_common::{Backlight, DsiConfig, DsiDevice, ErrorKind, Regulator};
use embedded_hal::digital::{self, ErrorType, OutputPin, PinState};

use crate::{EventLog, HostEvent};

pub struct SimRegulator {
    name: &'static str,
    log: EventLog,
    enabled: bool,
    fail_enable: bool,
    fail_disable: bool,
}

impl SimRegulator {
    pub fn new(name: &'static str, log: EventLog) -> Self {
        Self {
            name,
            log,
            enabled: false,
            fail_enable: false,
            fail_disable: false,
        }
    }

    pub fn fail_enable(mut self, fail: bool) -> Self {
        self.fail_enable = fail;
        self
    }

    pub fn fail_disable(mut self, fail: bool) -> Self {
        self.fail_disable = fail;
        self
    }
}

impl Regulator for SimRegulator {
    type Error = ErrorKind;

    fn enable(&mut self) -> Result<(), Self::Error> {
        if self.fail_enable {
            log::warn!("[sim] regulator {} refuses to enable", self.name);
            return Err(ErrorKind::Io);
        }
        self.enabled = true;
        self.log.push(HostEvent::RegulatorOn(self.name));
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        if self.fail_disable {
            log::warn!("[sim] regulator {} refuses to disable", self.name);
            return Err(ErrorKind::Io);
        }
        self.enabled = false;
        self.log.push(HostEvent::RegulatorOff(self.name));
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimPinError;

impl digital::Error for SimPinError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

pub struct SimResetPin {
    log: EventLog,
    broken: bool,
}

impl SimResetPin {
    pub fn new(log: EventLog) -> Self {
        Self { log, broken: false }
    }

    /// 之后的写入全部失败
    pub fn break_pin(&mut self) {
        self.broken = true;
    }
}

impl ErrorType for SimResetPin {
    type Error = SimPinError;
}

impl OutputPin for SimResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_state(PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_state(PinState::High)
    }

    fn set_state(&mut self, state: PinState) -> Result<(), Self::Error> {
        if self.broken {
            return Err(SimPinError);
        }
        self.log.push(HostEvent::Reset(state));
        Ok(())
    }
}

/// 记录 DCS 包的 DSI 外设。命令字节在故障列表中的写入返回 [`ErrorKind::Io`]，不会上线
pub struct SimDsi {
    log: EventLog,
    faults: Vec<u8>,
    fail_attach: Option<ErrorKind>,
    attached: Option<DsiConfig>,
}

impl SimDsi {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            faults: Vec::new(),
            fail_attach: None,
            attached: None,
        }
    }

    pub fn fail_on(&mut self, cmd: u8) {
        if !self.faults.contains(&cmd) {
            self.faults.push(cmd);
        }
    }

    pub fn fail_attach(&mut self, kind: ErrorKind) {
        self.fail_attach = Some(kind);
    }

    pub fn attached(&self) -> Option<&DsiConfig> {
        self.attached.as_ref()
    }
}

impl DsiDevice for SimDsi {
    type Error = ErrorKind;

    async fn dcs_write_buffer(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if data.first().is_some_and(|cmd| self.faults.contains(cmd)) {
            log::warn!("[sim] DCS write {:02x?} rejected", data);
            return Err(ErrorKind::Io);
        }
        self.log.push(HostEvent::Dcs(data.to_vec()));
        Ok(())
    }

    fn attach(&mut self, config: &DsiConfig) -> Result<(), Self::Error> {
        if let Some(kind) = self.fail_attach {
            return Err(kind);
        }
        self.attached = Some(*config);
        self.log.push(HostEvent::Attach(*config));
        Ok(())
    }

    fn detach(&mut self) {
        self.attached = None;
        self.log.push(HostEvent::Detach);
    }
}

pub struct SimBacklight {
    log: EventLog,
}

impl SimBacklight {
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }
}

impl Backlight for SimBacklight {
    type Error = ErrorKind;

    fn enable(&mut self) -> Result<(), Self::Error> {
        self.log.push(HostEvent::BacklightOn);
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        self.log.push(HostEvent::BacklightOff);
        Ok(())
    }
}
