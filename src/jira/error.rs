//! Jira 客户端错误类型

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum JiraError {
    /// 服务端返回了非预期状态码
    #[error("{} - {body}", .status.as_u16())]
    Status { status: StatusCode, body: String },

    /// DNS / TLS / 连接等传输层错误
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// 响应体无法解析
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl JiraError {
    /// 读取响应体构造状态码错误，读取失败时 body 为空
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Self::Status { status, body }
    }
}
