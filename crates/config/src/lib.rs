//! jobsite-config - 配置加载库
//!
//! 加载顺序：内置默认值 → `{dir}/default.toml` → `{dir}/{APP_ENV}.toml` → `ESTIMATOR_` 前缀环境变量

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// 遥测配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 是否输出 JSON 格式日志（生产环境）
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

/// 目录匹配评分权重
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_name_weight")]
    pub name_weight: f64,
    #[serde(default = "default_unit_weight")]
    pub unit_weight: f64,
    #[serde(default = "default_cost_weight")]
    pub cost_weight: f64,
    #[serde(default = "default_match_limit")]
    pub default_limit: usize,
}

fn default_name_weight() -> f64 {
    0.6
}

fn default_unit_weight() -> f64 {
    0.25
}

fn default_cost_weight() -> f64 {
    0.15
}

fn default_match_limit() -> usize {
    5
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            name_weight: default_name_weight(),
            unit_weight: default_unit_weight(),
            cost_weight: default_cost_weight(),
            default_limit: default_match_limit(),
        }
    }
}

/// 使用情况统计配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageConfig {
    /// 历史数据推送的防抖窗口（毫秒）
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_usage_limit")]
    pub default_limit: usize,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_usage_limit() -> usize {
    10
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            default_limit: default_usage_limit(),
        }
    }
}

/// 推荐器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// 每扇门扣除的墙面面积（平方英尺）
    #[serde(default = "default_door_allowance")]
    pub door_allowance_sqft: f64,
    /// 每扇窗扣除的墙面面积（平方英尺）
    #[serde(default = "default_window_allowance")]
    pub window_allowance_sqft: f64,
    #[serde(default = "default_wall_height")]
    pub default_wall_height_ft: f64,
    #[serde(default = "default_coats")]
    pub default_coats: u32,
}

fn default_door_allowance() -> f64 {
    21.0
}

fn default_window_allowance() -> f64 {
    15.0
}

fn default_wall_height() -> f64 {
    8.0
}

fn default_coats() -> u32 {
    2
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            door_allowance_sqft: default_door_allowance(),
            window_allowance_sqft: default_window_allowance(),
            default_wall_height_ft: default_wall_height(),
            default_coats: default_coats(),
        }
    }
}

/// 估算引擎配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub usage: UsageConfig,
    #[serde(default)]
    pub recommender: RecommenderConfig,
}

fn default_app_name() -> String {
    "materials-estimation".to_string()
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            app_env: default_app_env(),
            telemetry: TelemetryConfig::default(),
            scoring: ScoringConfig::default(),
            usage: UsageConfig::default(),
            recommender: RecommenderConfig::default(),
        }
    }
}

impl EstimatorConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed("ESTIMATOR_").split("__"));

        Self::from_figment(figment)
    }

    /// 从任意 figment 提取并校验配置
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置取值范围
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scoring;
        if s.name_weight < 0.0 || s.unit_weight < 0.0 || s.cost_weight < 0.0 {
            return Err(ConfigError::Invalid(
                "scoring weights must be non-negative".to_string(),
            ));
        }
        let sum = s.name_weight + s.unit_weight + s.cost_weight;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::Invalid(format!(
                "scoring weights must sum to 1.0, got {sum}"
            )));
        }
        if s.default_limit < 1 {
            return Err(ConfigError::Invalid(
                "scoring.default_limit must be >= 1".to_string(),
            ));
        }

        if self.usage.default_limit < 1 {
            return Err(ConfigError::Invalid(
                "usage.default_limit must be >= 1".to_string(),
            ));
        }

        let r = &self.recommender;
        if r.door_allowance_sqft < 0.0 || r.window_allowance_sqft < 0.0 {
            return Err(ConfigError::Invalid(
                "opening allowances must be >= 0".to_string(),
            ));
        }
        if r.default_wall_height_ft <= 0.0 {
            return Err(ConfigError::Invalid(
                "recommender.default_wall_height_ft must be > 0".to_string(),
            ));
        }
        if r.default_coats < 1 {
            return Err(ConfigError::Invalid(
                "recommender.default_coats must be >= 1".to_string(),
            ));
        }

        Ok(())
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}
