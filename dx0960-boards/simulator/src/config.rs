use dx0960_common::PanelConfig;
use serde::Deserialize;

/// 模拟器配置，从命令行给出的 JSON 文件读取，缺省字段取默认值
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// env_logger 过滤串，`RUST_LOG` 优先
    pub log_level: String,
    /// 延时是否真实睡眠
    pub realtime: bool,
    /// 令该 DCS 命令写入失败
    pub fail_dcs: Option<u8>,
    /// 令该供电上电失败
    pub fail_supply: Option<String>,
    pub backlight: bool,
    pub panel: PanelConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            log_level: String::from("info"),
            realtime: false,
            fail_dcs: None,
            fail_supply: None,
            backlight: true,
            panel: PanelConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SimulatorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dx0960_common::ResetPolarity;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = SimulatorConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SimulatorConfig::default());
    }

    #[test]
    fn faults_and_panel_section_are_read() {
        let cfg = SimulatorConfig::from_json(
            r#"{
                "realtime": true,
                "fail_dcs": 41,
                "fail_supply": "avdd",
                "backlight": false,
                "panel": { "reset_polarity": "active-low" }
            }"#,
        )
        .unwrap();

        assert!(cfg.realtime);
        assert_eq!(cfg.fail_dcs, Some(0x29));
        assert_eq!(cfg.fail_supply.as_deref(), Some("avdd"));
        assert!(!cfg.backlight);
        assert_eq!(cfg.panel.reset_polarity, ResetPolarity::ActiveLow);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SimulatorConfig::from_json("{ realtime: yes }"),
            Err(ConfigError::Parse(_))
        ));
    }
}
