//! 用户数据模型
//!
//! `RemoteUser` 对应 `/rest/api/3/users` 返回数组中的元素，
//! `UserRecord` 是写入导出文件的精简投影。

use serde::{Deserialize, Serialize};

/// 已删除账号的 accountType
pub const FORMER_ACCOUNT_TYPE: &str = "former";

/// 用户列表接口返回的单个用户（只读取需要的字段）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    #[serde(default)]
    pub account_id: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    /// 受隐私设置影响，可能缺失
    #[serde(default)]
    pub email_address: Option<String>,

    /// 缺失时按活跃处理
    #[serde(default)]
    pub active: Option<bool>,

    /// atlassian / app / customer / former ...
    #[serde(default)]
    pub account_type: Option<String>,
}

impl RemoteUser {
    /// 是否为停用（非删除）账号
    ///
    /// `active == false` 且 `accountType != "former"`
    pub fn is_inactive(&self) -> bool {
        !self.active.unwrap_or(true) && self.account_type.as_deref() != Some(FORMER_ACCOUNT_TYPE)
    }
}

/// 导出文件中的用户记录
///
/// 文件允许人工编辑，所有字段都可能缺失
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub account_type: Option<String>,
}

impl UserRecord {
    /// 删除时使用的 accountId，空字符串视为缺失
    pub fn deletable_id(&self) -> Option<&str> {
        self.account_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn display_name_or_unknown(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Unknown")
    }

    pub fn email_or_placeholder(&self) -> &str {
        self.email_address.as_deref().unwrap_or("No email")
    }
}

impl From<RemoteUser> for UserRecord {
    fn from(user: RemoteUser) -> Self {
        Self {
            account_id: user.account_id,
            display_name: user.display_name,
            email_address: user.email_address,
            active: user.active,
            account_type: user.account_type,
        }
    }
}

/// `/rest/api/3/myself` 响应（只关心显示名）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(default)]
    pub display_name: Option<String>,
}
