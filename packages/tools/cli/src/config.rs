//! CLI 설정
//!
//! `~/.rowgate/config.json`에서 기본값을 읽습니다.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use rowgate_store::StoreConfig;

const DEFAULT_LIMIT: u64 = 100;

/// CLI 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// 기본 데이터베이스 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,

    /// view/recent 기본 행 수
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_limit: Option<u64>,
}

impl CliConfig {
    /// 설정 파일 경로
    fn config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home.join(".rowgate").join("config.json"))
    }

    /// 설정 로드 (파일이 없으면 기본값)
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn default_limit(&self) -> u64 {
        self.default_limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// 접속 설정 결정
    ///
    /// `--database-url` > 환경변수 > 설정 파일 순서입니다.
    pub fn store_config(&self, flag: Option<&str>) -> anyhow::Result<StoreConfig> {
        if let Some(url) = flag {
            return Ok(StoreConfig::from_url(url));
        }
        match StoreConfig::from_env() {
            Ok(config) => Ok(config),
            Err(env_err) => match &self.database_url {
                Some(url) => Ok(StoreConfig::from_url(url.as_str())),
                None => Err(anyhow::anyhow!(
                    "{env_err}. Use --database-url, set ROWGATE_DATABASE_URL, or add database_url to ~/.rowgate/config.json"
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_file() {
        let config =
            CliConfig::parse(r#"{"database_url":"mysql://app@db/league","default_limit":25}"#)
                .unwrap();
        assert_eq!(config.database_url.as_deref(), Some("mysql://app@db/league"));
        assert_eq!(config.default_limit(), 25);

        let empty = CliConfig::parse("{}").unwrap();
        assert_eq!(empty.default_limit(), 100);
    }

    #[test]
    fn test_flag_wins() {
        let config = CliConfig {
            database_url: Some("mysql://file@db/league".to_string()),
            default_limit: None,
        };
        let store = config.store_config(Some("mysql://flag@db/league")).unwrap();
        assert!(format!("{store:?}").contains("flag@db"));
    }
}
