//! 会话与凭据
//!
//! 启动时确定一次 domain / email / API Token，之后不再修改。

use std::fmt;

use anyhow::Result;

use crate::console::{Terminal, is_affirmative};
use crate::model::config::Config;

/// 一次运行的会话信息
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub domain: String,
    pub email: String,
    pub api_token: String,
    pub base_url: String,
}

impl Session {
    pub fn new(
        domain: impl Into<String>,
        email: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        let domain = domain.into();
        let base_url = base_url_for(&domain);
        Self {
            domain,
            email: email.into(),
            api_token: api_token.into(),
            base_url,
        }
    }

    /// 指向其他地址（测试用 mock server）
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 交互式确定凭据
    ///
    /// 已配置的 email / token 先询问是否沿用（空输入视为同意），
    /// 未配置或拒绝时再提示输入；Token 不回显。不校验格式。
    pub fn setup(config: &Config, term: &mut dyn Terminal) -> Result<Self> {
        term.say("JIRA User Management Tool");
        term.say(&"=".repeat(40));

        let domain = match config.domain.as_deref() {
            Some(domain) => domain.to_string(),
            None => term.prompt("Enter your JIRA domain (<domain>.atlassian.net): ")?,
        };

        let mut email = None;
        if let Some(stored) = config.email.as_deref() {
            let answer = term.prompt(&format!("Use stored email ({})? [Y/n]: ", stored))?;
            if is_affirmative(&answer) {
                email = Some(stored.to_string());
            }
        }
        let email = match email {
            Some(email) => email,
            None => term.prompt("Enter your JIRA email: ")?,
        };

        let mut api_token = None;
        if let Some(stored) = config.api_token.as_deref() {
            let answer = term.prompt("Use stored API token? [Y/n]: ")?;
            if is_affirmative(&answer) {
                api_token = Some(stored.to_string());
            }
        }
        let api_token = match api_token {
            Some(token) => token,
            None => term.prompt_secret("Enter your JIRA API token: ")?,
        };

        let session = Self::new(domain, email, api_token);
        tracing::debug!("会话已建立: {:?}", session);
        term.say(&format!("Connecting to: {}", session.base_url));
        Ok(session)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("domain", &self.domain)
            .field("email", &self.email)
            .field("api_token", &mask_secret(&self.api_token))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Jira Cloud 站点地址
pub fn base_url_for(domain: &str) -> String {
    format!("https://{}.atlassian.net", domain)
}

/// 对密钥进行脱敏：保留前 4 个字符，其余用 *** 替代
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{}***", prefix)
}
