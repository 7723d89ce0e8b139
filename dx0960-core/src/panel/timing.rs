//! 厂商给定的上电/断电时序，单位毫秒

/// 供电稳定
pub const POWER_ON_SETTLE_MS: u32 = 30;
pub const RESET_ASSERT_MS: u32 = 50;
pub const RESET_DEASSERT_MS: u32 = 50;
/// 复位脉冲结束后，发送初始化命令之前
pub const RESET_RELEASE_MS: u32 = 200;
pub const INIT_CMD_DELAY_MS: u32 = 50;
/// prepare 失败回滚时，释放复位后到断电之间
pub const POWER_DOWN_RESET_MS: u32 = 50;

pub const ENABLE_SETTLE_MS: u32 = 150;
pub const DISPLAY_ON_MS: u32 = 50;

pub const SLEEP_ENTER_MS: u32 = 200;
pub const UNPREPARE_RESET_MS: u32 = 20;
