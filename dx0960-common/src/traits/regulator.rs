use crate::types::HwError;

/// 面板使用的单路供电
pub trait Regulator {
    type Error: HwError;

    fn enable(&mut self) -> Result<(), Self::Error>;

    fn disable(&mut self) -> Result<(), Self::Error>;

    fn is_enabled(&self) -> bool;
}
