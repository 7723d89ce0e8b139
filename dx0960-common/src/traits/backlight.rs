//! 通用背光 trait

use core::convert::Infallible;

use crate::types::HwError;

/// 通用背光 trait
///
/// 面板在设备树中声明了背光时，宿主会在面板使能之后打开背光，
/// 在面板关闭之前关闭背光。
pub trait Backlight {
    /// 错误类型
    type Error: HwError;

    /// 打开背光
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// 关闭背光
    fn disable(&mut self) -> Result<(), Self::Error>;
}

/// 允许空实现的 Backlight（用于没有背光的面板）
impl Backlight for () {
    type Error = Infallible;

    fn enable(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
