//! DX0960 面板驱动的模拟宿主
//!
//! 所有模拟设备写入同一个 [`EventLog`]，可以检查供电、复位、DCS 和延时
//! 在设备之间的先后顺序。

use std::cell::RefCell;
use std::rc::Rc;

use dx0960_common::DsiConfig;
use embedded_hal::digital::PinState;

mod delay;
mod devices;
mod resources;

pub use delay::SimDelay;
pub use devices::{SimBacklight, SimDsi, SimPinError, SimRegulator, SimResetPin};
pub use resources::SimResources;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    RegulatorOn(&'static str),
    RegulatorOff(&'static str),
    GpioRequested { con_id: &'static str, initial: PinState },
    Reset(PinState),
    Dcs(Vec<u8>),
    Delay(u32),
    Attach(DsiConfig),
    Detach,
    BacklightOn,
    BacklightOff,
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    inner: Rc<RefCell<Vec<HostEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: HostEvent) {
        log::trace!("host: {:?}", event);
        self.inner.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.inner.borrow().clone()
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    /// 所有成功发出的 DCS 包按顺序拼接
    pub fn dcs_bytes(&self) -> Vec<u8> {
        self.inner
            .borrow()
            .iter()
            .filter_map(|e| match e {
                HostEvent::Dcs(data) => Some(data.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.inner
            .borrow()
            .iter()
            .filter_map(|e| match e {
                HostEvent::Delay(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    pub fn position(&self, pred: impl Fn(&HostEvent) -> bool) -> Option<usize> {
        self.inner.borrow().iter().position(pred)
    }

    pub fn last_reset_level(&self) -> Option<PinState> {
        self.inner.borrow().iter().rev().find_map(|e| match e {
            HostEvent::Reset(level) => Some(*level),
            HostEvent::GpioRequested { con_id: "reset", initial } => Some(*initial),
            _ => None,
        })
    }
}
