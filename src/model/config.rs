use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::http_client::ProxyConfig;

/// 默认导出文件名
pub const DEFAULT_USERS_FILE: &str = "non_active_users.json";

pub const ENV_DOMAIN: &str = "JIRA_DOMAIN";
pub const ENV_EMAIL: &str = "JIRA_EMAIL";
pub const ENV_API_TOKEN: &str = "JIRA_API_TOKEN";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TlsBackend {
    Rustls,
    NativeTls,
}

impl Default for TlsBackend {
    fn default() -> Self {
        Self::Rustls
    }
}

/// 应用配置
///
/// 优先级（低 → 高）：config.json → 环境变量 → 命令行参数
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Jira Cloud 站点名（`https://{domain}.atlassian.net`）
    #[serde(default)]
    pub domain: Option<String>,

    /// 预置的登录邮箱，启动时询问是否使用
    #[serde(default)]
    pub email: Option<String>,

    /// 预置的 API Token，启动时询问是否使用
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// 非活跃用户导出文件路径
    #[serde(default = "default_users_file")]
    pub users_file: String,

    #[serde(default = "default_tls_backend")]
    pub tls_backend: TlsBackend,

    /// HTTP 代理地址（可选）
    /// 支持格式: http://host:port, https://host:port, socks5://host:port
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// 代理认证用户名（可选）
    #[serde(default)]
    pub proxy_username: Option<String>,

    /// 代理认证密码（可选）
    #[serde(default)]
    pub proxy_password: Option<String>,

    /// 请求超时（秒），未配置时不设超时
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_users_file() -> String {
    DEFAULT_USERS_FILE.to_string()
}

fn default_tls_backend() -> TlsBackend {
    TlsBackend::Rustls
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            email: None,
            api_token: None,
            users_file: default_users_file(),
            tls_backend: default_tls_backend(),
            proxy_url: None,
            proxy_username: None,
            proxy_password: None,
            timeout_secs: None,
        }
    }
}

impl Config {
    /// 获取默认配置文件路径
    pub fn default_config_path() -> &'static str {
        "config.json"
    }

    /// 从文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            // 配置文件不存在，返回默认配置
            tracing::debug!("配置文件不存在，使用默认配置: {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        Ok(config)
    }

    /// 用环境变量覆盖凭据字段
    ///
    /// `lookup` 一般传 `|k| std::env::var(k).ok()`，空值视为未设置
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(domain) = non_empty(ENV_DOMAIN) {
            self.domain = Some(domain);
        }
        if let Some(email) = non_empty(ENV_EMAIL) {
            self.email = Some(email);
        }
        if let Some(token) = non_empty(ENV_API_TOKEN) {
            self.api_token = Some(token);
        }
    }

    /// 由配置生成代理设置
    pub fn proxy(&self) -> Option<ProxyConfig> {
        let url = self.proxy_url.as_deref()?;
        let mut proxy = ProxyConfig::new(url);
        if let (Some(username), Some(password)) = (&self.proxy_username, &self.proxy_password) {
            proxy = proxy.with_auth(username, password);
        }
        Some(proxy)
    }
}
