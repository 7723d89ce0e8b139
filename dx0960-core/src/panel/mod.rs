//! DX0960BE40A1 面板驱动本体
//!
//! 上电：供电 → 复位脉冲 → 初始化命令；使能：display on；
//! 关闭：display off；断电：display off + sleep → 释放复位 → 断电。

pub mod init;
pub mod mode;
pub mod timing;

use dx0960_common as dxc;
use dxc::{
    Connector, ConnectorType, DcsExt, DeviceResources, DsiConfig, DsiDevice, DsiDriver,
    DsiModeFlag, HwError, Panel, PanelConfig, PanelDescriptor, PanelError, PanelFuncs,
    PanelRegistry, PanelResult, PixelFormat, Regulator,
};
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use enumset::enum_set;

use crate::reset::ResetLine;
use crate::supplies::RegulatorBulk;

pub use init::{INIT_CMD_LEN, INIT_CMDS, InitCmd};
pub use mode::{DEFAULT_MODE, MODE_TYPE};
use timing::*;

pub const DRIVER_NAME: &str = "dx0960be40a1";
pub const COMPATIBLE: &str = "dx,dx0960be40a1";

/// 供电名称，按上电顺序排列
pub const SUPPLY_NAMES: [&str; 3] = ["dvdd", "avdd", "cvdd"];
pub const RESET_GPIO: &str = "reset";

pub const DSI_LANES: u8 = 4;
pub const DSI_FORMAT: PixelFormat = PixelFormat::Rgb888;

pub struct Dx0960Panel<DSI, REG, RST, DELAY> {
    dsi: DSI,
    supplies: RegulatorBulk<REG, 3>,
    reset: ResetLine<RST>,
    delay: DELAY,
}

impl<DSI, REG, RST, DELAY> DsiDriver for Dx0960Panel<DSI, REG, RST, DELAY> {
    const NAME: &'static str = DRIVER_NAME;
    const OF_MATCH_TABLE: &'static [&'static str] = &[COMPATIBLE];
}

impl<DSI, REG, RST, DELAY> Dx0960Panel<DSI, REG, RST, DELAY>
where
    DSI: DsiDevice,
    REG: Regulator,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// 向 DSI 主机申请的链路参数
    pub fn dsi_config() -> DsiConfig {
        DsiConfig {
            mode_flags: enum_set!(DsiModeFlag::Video),
            format: DSI_FORMAT,
            lanes: DSI_LANES,
        }
    }

    /// 绑定设备：获取供电和复位 GPIO，注册面板并 attach 到 DSI 主机
    pub fn probe<RES, REGISTRY>(
        dsi: DSI,
        resources: &mut RES,
        registry: &mut REGISTRY,
        delay: DELAY,
        config: &PanelConfig,
    ) -> PanelResult<Panel<Self, RES::Backlight>>
    where
        RES: DeviceResources<Regulator = REG, Pin = RST>,
        REGISTRY: PanelRegistry,
    {
        if !Self::matches(resources.compatible()) {
            dxc::debug!("{} does not match {}", resources.compatible(), DRIVER_NAME);
            return Err(PanelError::NoMatch);
        }

        let supplies = RegulatorBulk::get(resources, &SUPPLY_NAMES)?;
        let reset = ResetLine::get(resources, RESET_GPIO, config.reset_polarity)?;

        let mut panel = Panel::new(
            Self {
                dsi,
                supplies,
                reset,
                delay,
            },
            ConnectorType::Dsi,
        );

        let backlight = resources.backlight().map_err(|kind| {
            dxc::error!("failed to get backlight: {}", kind);
            PanelError::Backlight(kind)
        })?;
        if let Some(backlight) = backlight {
            panel.set_backlight(backlight);
        }

        registry.add(PanelDescriptor {
            name: DRIVER_NAME,
            connector_type: panel.connector_type(),
        })?;

        if let Err(e) = panel.funcs_mut().attach() {
            registry.remove(DRIVER_NAME);
            return Err(e);
        }

        dxc::info!("{} probed", DRIVER_NAME);
        Ok(panel)
    }

    /// 从 DSI 主机 detach 并注销面板，把 DSI 设备交还调用者
    pub fn remove<B, REGISTRY>(panel: Panel<Self, B>, registry: &mut REGISTRY) -> DSI
    where
        B: dxc::Backlight,
        REGISTRY: PanelRegistry,
    {
        let (mut this, _backlight) = panel.into_parts();
        this.dsi.detach();
        registry.remove(DRIVER_NAME);
        dxc::info!("{} removed", DRIVER_NAME);
        this.dsi
    }

    pub fn dsi(&self) -> &DSI {
        &self.dsi
    }

    pub fn dsi_mut(&mut self) -> &mut DSI {
        &mut self.dsi
    }

    pub fn supplies(&self) -> &RegulatorBulk<REG, 3> {
        &self.supplies
    }

    fn attach(&mut self) -> PanelResult<()> {
        let config = Self::dsi_config();
        self.dsi.attach(&config).map_err(|e| {
            let err = PanelError::Attach(e.kind());
            dxc::error!("failed to attach to DSI host: {}", err);
            err
        })
    }

    async fn reset_pulse(&mut self) -> PanelResult<()> {
        self.reset.assert()?;
        self.delay.delay_ms(RESET_ASSERT_MS).await;

        self.reset.deassert()?;
        self.delay.delay_ms(RESET_DEASSERT_MS).await;

        self.reset.assert()?;
        self.delay.delay_ms(RESET_RELEASE_MS).await;
        Ok(())
    }

    /// prepare 失败后的回滚，总是返回 `cause`
    async fn power_down(&mut self, cause: PanelError) -> PanelResult<()> {
        if let Err(e) = self.reset.deassert() {
            dxc::warn!("failed to release reset: {}", e);
        }
        self.delay.delay_ms(POWER_DOWN_RESET_MS).await;

        if let Err(e) = self.supplies.disable() {
            dxc::error!("failed to power down after {}: {}", cause, e);
        }
        Err(cause)
    }
}

impl<DSI, REG, RST, DELAY> PanelFuncs for Dx0960Panel<DSI, REG, RST, DELAY>
where
    DSI: DsiDevice,
    REG: Regulator,
    RST: OutputPin,
    DELAY: DelayNs,
{
    async fn prepare(&mut self) -> PanelResult<()> {
        self.supplies.enable()?;
        self.delay.delay_ms(POWER_ON_SETTLE_MS).await;

        if let Err(e) = self.reset_pulse().await {
            dxc::error!("reset sequence failed: {}", e);
            return self.power_down(e).await;
        }

        for cmd in INIT_CMDS.iter() {
            let ret = self.dsi.dcs_write_buffer(&cmd.data).await;
            self.delay.delay_ms(INIT_CMD_DELAY_MS).await;
            if let Err(e) = ret {
                let err = PanelError::Dcs {
                    cmd: cmd.data[0],
                    kind: e.kind(),
                };
                dxc::error!("failed to send init command: {}", err);
                return self.power_down(err).await;
            }
        }

        dxc::debug!("panel prepared");
        Ok(())
    }

    async fn enable(&mut self) -> PanelResult<()> {
        // 任何一路未上电都不能发命令，unprepare 失败后可能只剩部分供电
        if !self.supplies.all_enabled() {
            dxc::error!("refusing to enable: supplies are off");
            return Err(PanelError::NotPrepared);
        }

        self.delay.delay_ms(ENABLE_SETTLE_MS).await;

        self.dsi.set_display_on().await.map_err(|e| {
            let err = PanelError::Dcs {
                cmd: dxc::DcsCommand::SetDisplayOn.opcode(),
                kind: e.kind(),
            };
            dxc::error!("failed to set display on: {}", err);
            err
        })?;

        self.delay.delay_ms(DISPLAY_ON_MS).await;
        Ok(())
    }

    async fn disable(&mut self) -> PanelResult<()> {
        self.dsi.set_display_off().await.map_err(|e| PanelError::Dcs {
            cmd: dxc::DcsCommand::SetDisplayOff.opcode(),
            kind: e.kind(),
        })
    }

    async fn unprepare(&mut self) -> PanelResult<()> {
        // 设备可能已经不可访问，命令失败只记录
        if let Err(e) = self.dsi.set_display_off().await {
            dxc::error!("failed to set display off: {}", e.kind());
        }

        if let Err(e) = self.dsi.enter_sleep_mode().await {
            dxc::error!("failed to enter sleep mode: {}", e.kind());
        }

        self.delay.delay_ms(SLEEP_ENTER_MS).await;

        if let Err(e) = self.reset.deassert() {
            dxc::error!("failed to release reset: {}", e);
        }
        self.delay.delay_ms(UNPREPARE_RESET_MS).await;

        self.supplies.disable()
    }

    fn get_modes<const N: usize>(&mut self, connector: &mut Connector<N>) -> PanelResult<usize> {
        if !connector.has_room() {
            dxc::error!(
                "failed to add mode {}x{}@{}",
                DEFAULT_MODE.hdisplay,
                DEFAULT_MODE.vdisplay,
                DEFAULT_MODE.vrefresh()
            );
            return Err(PanelError::OutOfMemory);
        }

        let mut mode = DEFAULT_MODE;
        mode.set_name();
        mode.mode_type = MODE_TYPE;

        connector.display_info.width_mm = mode.width_mm;
        connector.display_info.height_mm = mode.height_mm;
        connector.probed_add(mode)?;

        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dxc::{ErrorKind, PanelList, PanelState};
    use embassy_futures::block_on;
    use simulated_panel_host::{
        EventLog, HostEvent, SimDelay, SimDsi, SimRegulator, SimResetPin, SimResources,
    };

    #[test]
    fn reset_failure_during_prepare_rolls_back() {
        let log = EventLog::new();
        let mut res = SimResources::new(log.clone());
        let mut registry = PanelList::<1>::new();
        let mut panel = Dx0960Panel::probe(
            SimDsi::new(log.clone()),
            &mut res,
            &mut registry,
            SimDelay::new(log.clone()),
            &PanelConfig::default(),
        )
        .unwrap();

        panel.funcs_mut().reset.pin_mut().break_pin();
        log.clear();

        let err = block_on(panel.prepare()).unwrap_err();
        assert_eq!(err, PanelError::Gpio(ErrorKind::Io));
        assert_eq!(panel.state(), PanelState::Off);
        assert!(!panel.funcs().supplies().any_enabled());
        assert_eq!(log.dcs_bytes(), Vec::<u8>::new());
        assert_eq!(
            log.events(),
            vec![
                HostEvent::RegulatorOn("dvdd"),
                HostEvent::RegulatorOn("avdd"),
                HostEvent::RegulatorOn("cvdd"),
                HostEvent::Delay(POWER_ON_SETTLE_MS),
                HostEvent::Delay(POWER_DOWN_RESET_MS),
                HostEvent::RegulatorOff("cvdd"),
                HostEvent::RegulatorOff("avdd"),
                HostEvent::RegulatorOff("dvdd"),
            ]
        );
    }

    #[test]
    fn dsi_link_is_video_rgb888_four_lanes() {
        type P = Dx0960Panel<SimDsi, SimRegulator, SimResetPin, SimDelay>;
        let cfg = P::dsi_config();
        assert!(cfg.is_video_mode());
        assert_eq!(cfg.format, PixelFormat::Rgb888);
        assert_eq!(cfg.format.bits_per_pixel(), 24);
        assert_eq!(cfg.lanes, 4);
        assert!(P::matches("dx,dx0960be40a1"));
        assert!(!P::matches("feixin,k101-im2ba02"));
    }
}
