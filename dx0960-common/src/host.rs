//! 宿主侧的面板封装
//!
//! 记录 prepared / enabled 状态，跳过重复的状态切换，并在使能前后驱动背光。
//! 回调本身由具体驱动通过 [`PanelFuncs`] 提供。

use crate::traits::{Backlight, PanelDescriptor, PanelFuncs, PanelRegistry};
use crate::types::{Connector, ConnectorType, HwError, PanelError, PanelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelState {
    Off,
    Prepared,
    Enabled,
}

pub struct Panel<F, B = ()> {
    funcs: F,
    backlight: Option<B>,
    connector_type: ConnectorType,
    prepared: bool,
    enabled: bool,
}

impl<F: PanelFuncs, B: Backlight> Panel<F, B> {
    pub fn new(funcs: F, connector_type: ConnectorType) -> Self {
        Self {
            funcs,
            backlight: None,
            connector_type,
            prepared: false,
            enabled: false,
        }
    }

    pub fn set_backlight(&mut self, backlight: B) {
        self.backlight = Some(backlight);
    }

    pub fn has_backlight(&self) -> bool {
        self.backlight.is_some()
    }

    pub fn connector_type(&self) -> ConnectorType {
        self.connector_type
    }

    pub fn state(&self) -> PanelState {
        match (self.prepared, self.enabled) {
            (_, true) => PanelState::Enabled,
            (true, false) => PanelState::Prepared,
            (false, false) => PanelState::Off,
        }
    }

    pub fn funcs(&self) -> &F {
        &self.funcs
    }

    pub fn funcs_mut(&mut self) -> &mut F {
        &mut self.funcs
    }

    pub fn backlight_mut(&mut self) -> Option<&mut B> {
        self.backlight.as_mut()
    }

    pub fn into_parts(self) -> (F, Option<B>) {
        (self.funcs, self.backlight)
    }

    pub async fn prepare(&mut self) -> PanelResult<()> {
        if self.prepared {
            crate::warn!("Skipping prepare of already prepared panel");
            return Ok(());
        }

        self.funcs.prepare().await?;
        self.prepared = true;
        Ok(())
    }

    pub async fn enable(&mut self) -> PanelResult<()> {
        if self.enabled {
            crate::warn!("Skipping enable of already enabled panel");
            return Ok(());
        }
        if !self.prepared {
            crate::warn!("Refusing to enable unprepared panel");
            return Err(PanelError::NotPrepared);
        }

        self.funcs.enable().await?;
        self.enabled = true;

        if let Some(backlight) = self.backlight.as_mut() {
            if let Err(e) = backlight.enable() {
                crate::warn!("failed to enable backlight: {}", PanelError::Backlight(e.kind()));
            }
        }
        Ok(())
    }

    pub async fn disable(&mut self) -> PanelResult<()> {
        if !self.enabled {
            crate::warn!("Skipping disable of already disabled panel");
            return Ok(());
        }

        if let Some(backlight) = self.backlight.as_mut() {
            if let Err(e) = backlight.disable() {
                crate::warn!("failed to disable backlight: {}", PanelError::Backlight(e.kind()));
            }
        }

        self.funcs.disable().await?;
        self.enabled = false;
        Ok(())
    }

    pub async fn unprepare(&mut self) -> PanelResult<()> {
        if !self.prepared {
            crate::warn!("Skipping unprepare of already unprepared panel");
            return Ok(());
        }

        self.funcs.unprepare().await?;
        self.prepared = false;
        Ok(())
    }

    pub fn get_modes<const N: usize>(&mut self, connector: &mut Connector<N>) -> PanelResult<usize> {
        self.funcs.get_modes(connector)
    }
}

/// 固定容量的面板注册表
#[derive(Debug, Default)]
pub struct PanelList<const N: usize> {
    panels: heapless::Vec<PanelDescriptor, N>,
}

impl<const N: usize> PanelList<N> {
    pub const fn new() -> Self {
        Self {
            panels: heapless::Vec::new(),
        }
    }

    pub fn find(&self, name: &str) -> Option<&PanelDescriptor> {
        self.panels.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl<const N: usize> PanelRegistry for PanelList<N> {
    fn add(&mut self, panel: PanelDescriptor) -> PanelResult<()> {
        crate::debug!("registering panel {}", panel.name);
        self.panels.push(panel).map_err(|_| PanelError::OutOfMemory)
    }

    fn remove(&mut self, name: &str) {
        self.panels.retain(|p| p.name != name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;
    use embassy_futures::block_on;

    #[derive(Default)]
    struct Counting {
        calls: Vec<&'static str>,
        fail_enable: bool,
    }

    impl PanelFuncs for Counting {
        async fn prepare(&mut self) -> PanelResult<()> {
            self.calls.push("prepare");
            Ok(())
        }

        async fn enable(&mut self) -> PanelResult<()> {
            self.calls.push("enable");
            if self.fail_enable {
                return Err(PanelError::Dcs { cmd: 0x29, kind: ErrorKind::Io });
            }
            Ok(())
        }

        async fn disable(&mut self) -> PanelResult<()> {
            self.calls.push("disable");
            Ok(())
        }

        async fn unprepare(&mut self) -> PanelResult<()> {
            self.calls.push("unprepare");
            Ok(())
        }

        fn get_modes<const N: usize>(&mut self, _connector: &mut Connector<N>) -> PanelResult<usize> {
            Ok(0)
        }
    }

    #[derive(Default)]
    struct Light {
        on: bool,
        fail: bool,
    }

    impl Backlight for Light {
        type Error = ErrorKind;

        fn enable(&mut self) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Io);
            }
            self.on = true;
            Ok(())
        }

        fn disable(&mut self) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Io);
            }
            self.on = false;
            Ok(())
        }
    }

    #[test]
    fn redundant_transitions_are_skipped() {
        let mut panel: Panel<Counting> = Panel::new(Counting::default(), ConnectorType::Dsi);
        block_on(async {
            panel.unprepare().await.unwrap();
            panel.prepare().await.unwrap();
            panel.prepare().await.unwrap();
            panel.enable().await.unwrap();
            panel.enable().await.unwrap();
            panel.disable().await.unwrap();
            panel.disable().await.unwrap();
            panel.unprepare().await.unwrap();
        });
        assert_eq!(panel.funcs().calls, ["prepare", "enable", "disable", "unprepare"]);
        assert_eq!(panel.state(), PanelState::Off);
    }

    #[test]
    fn enable_requires_prepare() {
        let mut panel = Panel::new(Counting::default(), ConnectorType::Dsi);
        panel.set_backlight(Light::default());

        assert_eq!(block_on(panel.enable()), Err(PanelError::NotPrepared));
        assert!(panel.funcs().calls.is_empty());
        assert_eq!(panel.state(), PanelState::Off);
        assert!(!panel.backlight_mut().unwrap().on);
    }

    #[test]
    fn failed_enable_keeps_state_and_backlight_off() {
        let funcs = Counting { fail_enable: true, ..Default::default() };
        let mut panel = Panel::new(funcs, ConnectorType::Dsi);
        panel.set_backlight(Light::default());

        block_on(async {
            panel.prepare().await.unwrap();
            assert!(panel.enable().await.is_err());
        });
        assert_eq!(panel.state(), PanelState::Prepared);
        assert!(!panel.backlight_mut().unwrap().on);
    }

    #[test]
    fn backlight_follows_enable_and_disable() {
        let mut panel = Panel::new(Counting::default(), ConnectorType::Dsi);
        panel.set_backlight(Light::default());

        block_on(async {
            panel.prepare().await.unwrap();
            panel.enable().await.unwrap();
        });
        assert_eq!(panel.state(), PanelState::Enabled);
        assert!(panel.backlight_mut().unwrap().on);

        block_on(panel.disable()).unwrap();
        assert!(!panel.backlight_mut().unwrap().on);
    }

    #[test]
    fn backlight_failure_does_not_fail_enable() {
        let mut panel = Panel::new(Counting::default(), ConnectorType::Dsi);
        panel.set_backlight(Light { on: false, fail: true });

        block_on(async {
            panel.prepare().await.unwrap();
            panel.enable().await.unwrap();
            panel.disable().await.unwrap();
        });
        assert_eq!(panel.state(), PanelState::Prepared);
    }

    #[test]
    fn registry_rejects_when_full() {
        let mut list = PanelList::<1>::new();
        let desc = PanelDescriptor { name: "a", connector_type: ConnectorType::Dsi };
        list.add(desc).unwrap();
        assert_eq!(
            list.add(PanelDescriptor { name: "b", ..desc }),
            Err(PanelError::OutOfMemory)
        );

        list.remove("a");
        assert!(list.is_empty());
    }
}
