use crate::types::{Connector, ConnectorType, PanelResult};

/// 面板生命周期回调
///
/// 宿主保证同一面板的回调不会并发执行，调用顺序为
/// prepare → enable → disable → unprepare。
pub trait PanelFuncs {
    /// 上电并完成初始化命令
    async fn prepare(&mut self) -> PanelResult<()>;

    /// 打开显示
    async fn enable(&mut self) -> PanelResult<()>;

    /// 关闭显示
    async fn disable(&mut self) -> PanelResult<()>;

    /// 进入休眠并断电
    async fn unprepare(&mut self) -> PanelResult<()>;

    /// 向 `connector` 添加面板支持的模式，返回添加的数量
    fn get_modes<const N: usize>(&mut self, connector: &mut Connector<N>) -> PanelResult<usize>;
}

/// 面板在宿主中注册时的身份
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelDescriptor {
    pub name: &'static str,
    pub connector_type: ConnectorType,
}

/// 宿主的面板注册表（`drm_panel_add` / `drm_panel_remove`）
pub trait PanelRegistry {
    fn add(&mut self, panel: PanelDescriptor) -> PanelResult<()>;

    fn remove(&mut self, name: &str);
}

/// MIPI-DSI 驱动的静态绑定信息
pub trait DsiDriver {
    const NAME: &'static str;
    const OF_MATCH_TABLE: &'static [&'static str];

    fn matches(compatible: &str) -> bool {
        Self::OF_MATCH_TABLE.iter().any(|c| *c == compatible)
    }
}
