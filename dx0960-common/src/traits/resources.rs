use embedded_hal::digital::{OutputPin, PinState};

use crate::traits::{Backlight, Regulator};
use crate::types::ErrorKind;

/// 设备资源获取接口
///
/// 相当于探测阶段可以从设备树节点拿到的东西：兼容字符串、
/// 供电、GPIO 和可选的背光。
pub trait DeviceResources {
    type Regulator: Regulator;
    type Pin: OutputPin;
    type Backlight: Backlight;

    /// 设备节点的 compatible 字符串
    fn compatible(&self) -> &str;

    fn regulator(&mut self, supply: &'static str) -> Result<Self::Regulator, ErrorKind>;

    /// 申请名为 `con_id` 的 GPIO，并输出初始电平 `initial`
    fn gpio(&mut self, con_id: &'static str, initial: PinState) -> Result<Self::Pin, ErrorKind>;

    /// 节点未声明背光时返回 `Ok(None)`
    fn backlight(&mut self) -> Result<Option<Self::Backlight>, ErrorKind>;
}
