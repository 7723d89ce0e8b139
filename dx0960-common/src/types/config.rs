use serde::{Deserialize, Serialize};

/// 复位引脚的有效电平
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "kebab-case")]
pub enum ResetPolarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

/// 板级面板配置，相当于设备树里的属性
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub reset_polarity: ResetPolarity,
}
