use crate::types::{DisplayMode, PanelError, PanelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectorType {
    Unknown,
    Dpi,
    Dsi,
    Lvds,
}

/// 显示器物理信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayInfo {
    pub width_mm: u16,
    pub height_mm: u16,
}

/// 面板 `get_modes` 看到的连接器：物理尺寸加上探测到的模式列表，最多 `N` 个
#[derive(Debug)]
pub struct Connector<const N: usize> {
    pub connector_type: ConnectorType,
    pub display_info: DisplayInfo,
    probed_modes: heapless::Vec<DisplayMode, N>,
}

impl<const N: usize> Connector<N> {
    pub const fn new(connector_type: ConnectorType) -> Self {
        Self {
            connector_type,
            display_info: DisplayInfo { width_mm: 0, height_mm: 0 },
            probed_modes: heapless::Vec::new(),
        }
    }

    /// 是否还能再容纳一个模式
    pub fn has_room(&self) -> bool {
        !self.probed_modes.is_full()
    }

    pub fn probed_add(&mut self, mode: DisplayMode) -> PanelResult<()> {
        self.probed_modes
            .push(mode)
            .map_err(|_| PanelError::OutOfMemory)
    }

    pub fn probed_modes(&self) -> &[DisplayMode] {
        &self.probed_modes
    }

    pub fn preferred_mode(&self) -> Option<&DisplayMode> {
        self.probed_modes.iter().find(|m| m.is_preferred())
    }
}
