use std::time::Duration;

use embedded_hal_async::delay::DelayNs;

use crate::{EventLog, HostEvent};

/// 以毫秒记录每次等待；`realtime` 打开时还会像 `msleep` 一样真实睡眠
pub struct SimDelay {
    log: EventLog,
    realtime: bool,
}

impl SimDelay {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            realtime: false,
        }
    }

    pub fn realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    fn wait(&mut self, duration: Duration) {
        let ms = duration.as_micros().div_ceil(1000) as u32;
        self.log.push(HostEvent::Delay(ms));
        if self.realtime {
            std::thread::sleep(duration);
        }
    }
}

impl DelayNs for SimDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.wait(Duration::from_nanos(u64::from(ns)));
    }

    async fn delay_us(&mut self, us: u32) {
        self.wait(Duration::from_micros(u64::from(us)));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.wait(Duration::from_millis(u64::from(ms)));
    }
}
