// ==========================================
// 生产计划与库存分析引擎 - 配置管理器
// ==========================================
// 职责: 配置文件定位、加载、校验、保存
// 定位顺序: 显式路径 -> 环境变量 -> 用户配置目录 -> 内置默认值
// ==========================================

use crate::config::engine_config::EngineConfig;
use crate::config::error::{ConfigError, ConfigResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "PRODUCTION_ANALYTICS_CONFIG";

/// 用户配置目录下的子目录与文件名
const CONFIG_DIR_NAME: &str = "production-analytics";
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: EngineConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用内置默认配置
    pub fn with_defaults() -> Self {
        Self {
            config: EngineConfig::default(),
            source: None,
        }
    }

    /// 从 JSON 字符串加载 (加载后校验)
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(Self {
            config,
            source: None,
        })
    }

    /// 从文件加载 (文件必须存在)
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut manager = Self::from_json_str(&raw)?;
        manager.source = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            products = manager.config.products.len(),
            materials = manager.config.materials.len(),
            "配置加载完成"
        );
        Ok(manager)
    }

    /// 按定位顺序加载
    ///
    /// 显式路径与环境变量指定的文件必须存在; 默认位置的文件不存在时回退到内置默认值
    pub fn load(explicit_path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit_path {
            return Self::load_from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Self::load_from_file(Path::new(trimmed));
            }
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            Some(path) => {
                debug!(path = %path.display(), "默认配置文件不存在, 使用内置默认值");
                Ok(Self::with_defaults())
            }
            None => {
                warn!("无法获取用户配置目录, 使用内置默认值");
                Ok(Self::with_defaults())
            }
        }
    }

    /// 保存为格式化 JSON (必要时创建父目录)
    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        self.config.validate()?;

        let io_err = |source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let raw = serde_json::to_string_pretty(&self.config)?;
        fs::write(path, raw).map_err(io_err)?;

        info!(path = %path.display(), "配置已保存");
        Ok(())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn into_config(self) -> EngineConfig {
        self.config
    }

    /// 配置来源文件 (内置默认值时为 None)
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// 默认配置文件路径: <用户配置目录>/production-analytics/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
