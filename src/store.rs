//! 导出文件读写
//!
//! 非活跃用户以 JSON 数组（2 空格缩进）写入单个文件，每次拉取整体覆盖。

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crate::jira::model::user::UserRecord;

/// 整体覆盖写入
pub fn save_users(path: &Path, users: &[UserRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(users).context("序列化用户列表失败")?;
    std::fs::write(path, json).with_context(|| format!("写入 {} 失败", path.display()))?;
    tracing::debug!("已写入 {} 个用户到 {}", users.len(), path.display());
    Ok(())
}

/// 读取导出文件，文件不存在时返回 `None`
pub fn load_users(path: &Path) -> Result<Option<Vec<UserRecord>>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("读取 {} 失败", path.display())),
    };

    let users: Vec<UserRecord> = serde_json::from_str(&content)
        .with_context(|| format!("解析 {} 失败", path.display()))?;
    Ok(Some(users))
}

/// 删除旧的导出文件，返回是否确实删除了文件
pub fn remove_users_file(path: &Path) -> io::Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
