//! MIPI-DSI 外设接口与 DCS 命令

use crate::types::{DsiConfig, HwError};

/// Display Command Set 中本驱动用到的命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DcsCommand {
    EnterSleepMode = 0x10,
    ExitSleepMode = 0x11,
    SetDisplayOff = 0x28,
    SetDisplayOn = 0x29,
}

impl DcsCommand {
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

/// MIPI-DSI 链路的外设端
pub trait DsiDevice {
    type Error: HwError;

    /// 以 DCS 包发送 `data`，首字节为命令，其余为参数
    async fn dcs_write_buffer(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    fn attach(&mut self, config: &DsiConfig) -> Result<(), Self::Error>;

    fn detach(&mut self);
}

/// DCS 便捷方法，所有 [`DsiDevice`] 自动获得
pub trait DcsExt: DsiDevice {
    async fn dcs_write(&mut self, cmd: DcsCommand) -> Result<(), Self::Error> {
        self.dcs_write_buffer(&[cmd.opcode()]).await
    }

    async fn set_display_on(&mut self) -> Result<(), Self::Error> {
        self.dcs_write(DcsCommand::SetDisplayOn).await
    }

    async fn set_display_off(&mut self) -> Result<(), Self::Error> {
        self.dcs_write(DcsCommand::SetDisplayOff).await
    }

    async fn enter_sleep_mode(&mut self) -> Result<(), Self::Error> {
        self.dcs_write(DcsCommand::EnterSleepMode).await
    }

    async fn exit_sleep_mode(&mut self) -> Result<(), Self::Error> {
        self.dcs_write(DcsCommand::ExitSleepMode).await
    }
}

impl<T: DsiDevice + ?Sized> DcsExt for T {}
