//! Jira Cloud REST 客户端
//!
//! 只封装三个接口：`myself`、`users` 分页列表与 `user` 删除。
//! 每次调用只发一次请求，不做重试。

use reqwest::{Client, StatusCode};

use super::error::JiraError;
use super::model::user::{CurrentUser, RemoteUser};
use crate::session::Session;

/// `users` 接口每页条数
pub const PAGE_SIZE: u32 = 50;

/// Jira 客户端
pub struct JiraClient {
    client: Client,
    base_url: String,
    email: String,
    api_token: String,
}

impl JiraClient {
    /// 基于会话信息创建客户端（HTTP Basic: email + API Token）
    pub fn new(client: Client, session: &Session) -> Self {
        Self {
            client,
            base_url: session.base_url.trim_end_matches('/').to_string(),
            email: session.email.clone(),
            api_token: session.api_token.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 获取当前登录用户，用于连通性检查
    pub async fn myself(&self) -> Result<CurrentUser, JiraError> {
        let url = self.url("/rest/api/3/myself");
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .send()
            .await
            .map_err(JiraError::Transport)?;

        tracing::debug!("myself 响应: {}", response.status());

        if response.status() != StatusCode::OK {
            return Err(JiraError::from_response(response).await);
        }

        response.json::<CurrentUser>().await.map_err(JiraError::Decode)
    }

    /// 获取一页用户（包含活跃、停用与已删除账号）
    pub async fn list_users(
        &self,
        start_at: u32,
        max_results: u32,
    ) -> Result<Vec<RemoteUser>, JiraError> {
        let url = self.url("/rest/api/3/users");
        tracing::debug!("GET {} startAt={} maxResults={}", url, start_at, max_results);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .query(&[("startAt", start_at), ("maxResults", max_results)])
            .send()
            .await
            .map_err(JiraError::Transport)?;

        if response.status() != StatusCode::OK {
            return Err(JiraError::from_response(response).await);
        }

        let users = response
            .json::<Vec<RemoteUser>>()
            .await
            .map_err(JiraError::Decode)?;
        tracing::debug!("startAt={} 返回 {} 个用户", start_at, users.len());
        Ok(users)
    }

    /// 删除单个用户，仅 204 视为成功
    pub async fn delete_user(&self, account_id: &str) -> Result<(), JiraError> {
        let url = self.url("/rest/api/3/user");
        tracing::debug!("DELETE {} accountId={}", url, account_id);

        let response = self
            .client
            .delete(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .query(&[("accountId", account_id)])
            .send()
            .await
            .map_err(JiraError::Transport)?;

        if response.status() != StatusCode::NO_CONTENT {
            return Err(JiraError::from_response(response).await);
        }
        Ok(())
    }
}
