use crate::error::{Result, VisionError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use visionestate_common::{DisplayUnit, DEFAULT_ENDPOINT};

/// エンドポイントを上書きする環境変数
pub const ENDPOINT_ENV: &str = "VISIONESTATE_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub default_unit: DisplayUnit,
    /// 未設定なら待ち続ける
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            default_unit: DisplayUnit::Meter,
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込む（無ければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| VisionError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("visionestate").join("config.json"))
    }

    /// 送信先を決める（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_endpoint(&self, cli_override: Option<&str>) -> String {
        if let Some(endpoint) = cli_override.filter(|e| !e.trim().is_empty()) {
            return endpoint.trim().to_string();
        }
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                return endpoint.trim().to_string();
            }
        }
        self.endpoint.clone()
    }

    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        let endpoint = endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(VisionError::Config(format!(
                "エンドポイントは http:// または https:// で始めてください: {}",
                endpoint
            )));
        }
        self.endpoint = endpoint.to_string();
        Ok(())
    }
}
