//! 非活跃用户管理
//!
//! 连通性检查、分页拉取停用用户、导出文件审阅与批量删除。
//! 所有请求顺序执行，任何失败只报告一次，不重试。

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::console::Terminal;
use crate::jira::client::{JiraClient, PAGE_SIZE};
use crate::jira::error::JiraError;
use crate::jira::model::user::{RemoteUser, UserRecord};
use crate::session::Session;
use crate::store;
use crate::viewer::Viewer;

/// 删除前预览的条数
const PREVIEW_LIMIT: usize = 10;

/// 第一道确认需要输入的字面量
const DELETE_CONFIRMATION: &str = "DELETE";

/// 批量删除结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub total: usize,
}

/// 批量删除的结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// 导出文件不存在
    MissingFile,
    /// 导出文件无法解析
    Unreadable,
    /// 文件中没有用户
    NothingToDelete,
    /// 操作员未通过确认
    Cancelled,
    Completed(DeletionSummary),
}

pub struct UserManager {
    client: JiraClient,
    email: String,
    users_file: PathBuf,
}

impl UserManager {
    pub fn new(client: JiraClient, session: &Session, users_file: impl Into<PathBuf>) -> Self {
        Self {
            client,
            email: session.email.clone(),
            users_file: users_file.into(),
        }
    }

    pub fn users_file(&self) -> &Path {
        &self.users_file
    }

    /// 调用 `myself` 验证凭据
    pub async fn test_connection(&self, term: &mut dyn Terminal) -> bool {
        match self.client.myself().await {
            Ok(me) => {
                let name = me.display_name.as_deref().unwrap_or(&self.email);
                term.say(&format!("✓ Connected successfully as: {}", name));
                true
            }
            Err(e @ JiraError::Status { .. }) => {
                tracing::warn!("连通性检查失败: {}", e);
                term.say(&format!("✗ Connection failed: {}", e));
                false
            }
            Err(e) => {
                tracing::warn!("连通性检查出错: {}", e);
                term.say(&format!("✗ Connection error: {}", e));
                false
            }
        }
    }

    /// 分页拉取所有停用（非删除）用户
    ///
    /// 某一页失败时停止翻页并返回已累积的结果。
    pub async fn fetch_non_active_users(&self, term: &mut dyn Terminal) -> Vec<UserRecord> {
        let mut non_active = Vec::new();
        let mut start_at = 0;

        term.say("Fetching inactive users from JIRA...");

        loop {
            let users = match self.client.list_users(start_at, PAGE_SIZE).await {
                Ok(users) => users,
                Err(e) => {
                    tracing::warn!("startAt={} 拉取失败，返回已获取的 {} 个用户", start_at, non_active.len());
                    term.say(&format!("Error fetching users: {}", e));
                    break;
                }
            };
            if users.is_empty() {
                break;
            }

            let page_len = users.len();
            non_active.extend(
                users
                    .into_iter()
                    .filter(RemoteUser::is_inactive)
                    .map(UserRecord::from),
            );

            start_at += PAGE_SIZE;
            term.say(&format!(
                "Processed {} users, found {} inactive users so far...",
                start_at,
                non_active.len()
            ));

            // 不足一页说明已到末尾
            if page_len < PAGE_SIZE as usize {
                break;
            }
        }

        term.say(&format!(
            "Found {} inactive users (excluding deleted accounts)",
            non_active.len()
        ));
        non_active
    }

    /// 覆盖写入导出文件
    pub fn save_users_to_file(&self, term: &mut dyn Terminal, users: &[UserRecord]) -> Result<()> {
        store::save_users(&self.users_file, users)?;
        term.say(&format!(
            "✓ Saved {} non-active users to {}",
            users.len(),
            self.users_file.display()
        ));
        Ok(())
    }

    /// 删除上一次的导出文件，失败只警告
    pub fn remove_users_file(&self, term: &mut dyn Terminal) {
        match store::remove_users_file(&self.users_file) {
            Ok(true) => term.say(&format!("✓ Removed existing {}", self.users_file.display())),
            Ok(false) => {}
            Err(e) => term.say(&format!("Warning: Could not remove existing file: {}", e)),
        }
    }

    /// 用外部查看器打开导出文件，失败时提示手动打开
    pub fn open_file_for_review(&self, term: &mut dyn Terminal, viewer: &dyn Viewer) {
        let file = self.users_file.display();
        if !self.users_file.exists() {
            term.say(&format!("File {} not found!", file));
            return;
        }

        if let Err(e) = viewer.open(&self.users_file) {
            tracing::debug!("打开文件失败: {:#}", e);
            term.say(&format!("Could not automatically open file: {:#}", e));
            term.say(&format!("Please manually review the file: {}", file));
        }
    }

    /// 删除单个用户，仅 204 为成功；错误不会向外传播
    pub async fn delete_user(
        &self,
        term: &mut dyn Terminal,
        account_id: &str,
        display_name: &str,
    ) -> bool {
        match self.client.delete_user(account_id).await {
            Ok(()) => {
                term.say(&format!("✓ Deleted: {}", display_name));
                true
            }
            Err(e @ JiraError::Status { .. }) => {
                term.say(&format!("✗ Failed to delete {}: {}", display_name, e));
                false
            }
            Err(e) => {
                term.say(&format!("✗ Error deleting {}: {}", display_name, e));
                false
            }
        }
    }

    /// 读取导出文件，经两道确认后逐个删除
    ///
    /// 不是事务：中途失败不回滚，剩余用户继续尝试。
    /// 只有终端读写失败才返回 Err。
    pub async fn delete_users_from_file(&self, term: &mut dyn Terminal) -> Result<DeletionOutcome> {
        let users = match store::load_users(&self.users_file) {
            Ok(Some(users)) => users,
            Ok(None) => {
                term.say(&format!("File {} not found!", self.users_file.display()));
                return Ok(DeletionOutcome::MissingFile);
            }
            Err(e) => {
                term.say(&format!("✗ {:#}", e));
                return Ok(DeletionOutcome::Unreadable);
            }
        };

        term.say("");
        term.say(&format!("Found {} users to delete.", users.len()));
        if users.is_empty() {
            term.say("No users to delete.");
            return Ok(DeletionOutcome::NothingToDelete);
        }

        self.preview(term, &users);

        term.say("");
        term.say("⚠️  WARNING: This will permanently delete all these users from JIRA!");
        term.say("This action cannot be undone.");

        let confirm = term.prompt("\nType 'DELETE' to confirm deletion: ")?;
        if confirm != DELETE_CONFIRMATION {
            term.say("Deletion cancelled.");
            return Ok(DeletionOutcome::Cancelled);
        }

        let final_confirm = term.prompt(&format!(
            "Are you absolutely sure you want to delete {} users? [y/N]: ",
            users.len()
        ))?;
        if final_confirm.to_lowercase() != "y" {
            term.say("Deletion cancelled.");
            return Ok(DeletionOutcome::Cancelled);
        }

        term.say("");
        term.say("Starting deletion process...");
        tracing::info!("开始删除 {} 个用户", users.len());

        let mut summary = DeletionSummary {
            total: users.len(),
            ..DeletionSummary::default()
        };

        for user in &users {
            let display_name = user.display_name_or_unknown();
            let Some(account_id) = user.deletable_id() else {
                term.say(&format!("✗ Skipping {}: No account ID", display_name));
                summary.failed += 1;
                continue;
            };

            if self.delete_user(term, account_id, display_name).await {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }
        }

        term.say("");
        term.say("Deletion Summary:");
        term.say(&format!("✓ Successfully deleted: {}", summary.succeeded));
        term.say(&format!("✗ Failed to delete: {}", summary.failed));
        term.say(&format!("Total processed: {}", summary.total));
        tracing::info!(
            "删除完成: 成功 {} / 失败 {} / 共 {}",
            summary.succeeded,
            summary.failed,
            summary.total
        );

        Ok(DeletionOutcome::Completed(summary))
    }

    fn preview(&self, term: &mut dyn Terminal, users: &[UserRecord]) {
        term.say("");
        term.say("Users to be deleted:");
        term.say(&"-".repeat(60));

        for (i, user) in users.iter().take(PREVIEW_LIMIT).enumerate() {
            term.say(&format!(
                "{:2}. {} ({})",
                i + 1,
                user.display_name_or_unknown(),
                user.email_or_placeholder()
            ));
        }

        if users.len() > PREVIEW_LIMIT {
            term.say(&format!("... and {} more users", users.len() - PREVIEW_LIMIT));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::ScriptedTerminal;
    use crate::http_client::build_client;
    use crate::model::config::TlsBackend;
    use crate::viewer::testing::RecordingViewer;
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn manager_for(base_url: &str, users_file: &Path) -> UserManager {
        let session =
            Session::new("acme", "ops@example.com", "token123").with_base_url(base_url);
        let client = JiraClient::new(build_client(None, None, TlsBackend::Rustls).unwrap(), &session);
        UserManager::new(client, &session, users_file)
    }

    fn remote_user(id: usize, active: bool, account_type: &str) -> Value {
        json!({
            "accountId": id.to_string(),
            "displayName": format!("User {}", id),
            "emailAddress": format!("u{}@example.com", id),
            "active": active,
            "accountType": account_type,
        })
    }

    fn record(id: &str, name: &str) -> UserRecord {
        UserRecord {
            account_id: Some(id.to_string()),
            display_name: Some(name.to_string()),
            email_address: Some(format!("{}@example.com", id)),
            active: Some(false),
            account_type: Some("atlassian".to_string()),
        }
    }

    async fn mount_users_page(server: &MockServer, start_at: &str, body: Value, calls: u64) {
        Mock::given(method("GET"))
            .and(path("/rest/api/3/users"))
            .and(query_param("startAt", start_at))
            .and(query_param("maxResults", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(calls)
            .mount(server)
            .await;
    }

    async fn mount_delete(server: &MockServer, account_id: &str, status: u16, calls: u64) {
        Mock::given(method("DELETE"))
            .and(path("/rest/api/3/user"))
            .and(query_param("accountId", account_id))
            .respond_with(ResponseTemplate::new(status).set_body_string(if status == 204 {
                ""
            } else {
                "bad request"
            }))
            .expect(calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_connection_reports_display_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/3/myself"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"displayName": "Ops"})))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_for(&server.uri(), &dir.path().join("users.json"));
        let mut term = ScriptedTerminal::default();

        assert!(manager.test_connection(&mut term).await);
        assert!(term.printed("✓ Connected successfully as: Ops"));
    }

    #[tokio::test]
    async fn test_connection_falls_back_to_email() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/3/myself"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_for(&server.uri(), &dir.path().join("users.json"));
        let mut term = ScriptedTerminal::default();

        assert!(manager.test_connection(&mut term).await);
        assert!(term.printed("as: ops@example.com"));
    }

    #[tokio::test]
    async fn test_connection_failure_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/3/myself"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_for(&server.uri(), &dir.path().join("users.json"));
        let mut term = ScriptedTerminal::default();

        assert!(!manager.test_connection(&mut term).await);
        assert!(term.printed("✗ Connection failed: 401 - Unauthorized"));
    }

    #[tokio::test]
    async fn test_connection_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_for("http://127.0.0.1:1", &dir.path().join("users.json"));
        let mut term = ScriptedTerminal::default();

        assert!(!manager.test_connection(&mut term).await);
        assert!(term.printed("✗ Connection error:"));
    }

    #[tokio::test]
    async fn test_fetch_keeps_only_inactive_non_former_users() {
        let server = MockServer::start().await;
        mount_users_page(
            &server,
            "0",
            json!([
                {"accountId": "1", "displayName": "Active User", "emailAddress": "a@ex.com", "active": true, "accountType": "atlassian"},
                {"accountId": "2", "displayName": "Inactive User", "emailAddress": "i@ex.com", "active": false, "accountType": "atlassian"},
                {"accountId": "3", "displayName": "Former User", "emailAddress": "f@ex.com", "active": false, "accountType": "former"}
            ]),
            1,
        )
        .await;
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_for(&server.uri(), &dir.path().join("users.json"));
        let mut term = ScriptedTerminal::default();

        let users = manager.fetch_non_active_users(&mut term).await;

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].account_id.as_deref(), Some("2"));
        assert_eq!(users[0].display_name.as_deref(), Some("Inactive User"));
        assert!(term.printed("Found 1 inactive users (excluding deleted accounts)"));
    }

    #[tokio::test]
    async fn test_fetch_pages_until_short_page() {
        let server = MockServer::start().await;
        let full_page: Vec<Value> = (0..50).map(|i| remote_user(i, i % 2 == 0, "atlassian")).collect();
        let second_page: Vec<Value> = (50..100).map(|i| remote_user(i, false, "app")).collect();
        let short_page: Vec<Value> = (100..103).map(|i| remote_user(i, false, "atlassian")).collect();
        mount_users_page(&server, "0", json!(full_page), 1).await;
        mount_users_page(&server, "50", json!(second_page), 1).await;
        mount_users_page(&server, "100", json!(short_page), 1).await;
        mount_users_page(&server, "150", json!([]), 0).await;
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_for(&server.uri(), &dir.path().join("users.json"));
        let mut term = ScriptedTerminal::default();

        let users = manager.fetch_non_active_users(&mut term).await;

        // 第一页 25 个奇数 id 停用，第二页 50 个，第三页 3 个
        assert_eq!(users.len(), 78);
        assert_eq!(users[0].account_id.as_deref(), Some("1"));
        assert_eq!(users[77].account_id.as_deref(), Some("102"));
        assert!(term.printed("Processed 150 users, found 78 inactive users so far..."));
    }

    #[tokio::test]
    async fn test_fetch_stops_on_empty_page() {
        let server = MockServer::start().await;
        let full_page: Vec<Value> = (0..50).map(|i| remote_user(i, false, "atlassian")).collect();
        mount_users_page(&server, "0", json!(full_page), 1).await;
        mount_users_page(&server, "50", json!([]), 1).await;
        mount_users_page(&server, "100", json!([]), 0).await;
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_for(&server.uri(), &dir.path().join("users.json"));
        let mut term = ScriptedTerminal::default();

        let users = manager.fetch_non_active_users(&mut term).await;
        assert_eq!(users.len(), 50);
    }

    #[tokio::test]
    async fn test_fetch_returns_partial_results_on_error() {
        let server = MockServer::start().await;
        let full_page: Vec<Value> = (0..50).map(|i| remote_user(i, false, "atlassian")).collect();
        mount_users_page(&server, "0", json!(full_page), 1).await;
        Mock::given(method("GET"))
            .and(path("/rest/api/3/users"))
            .and(query_param("startAt", "50"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_for(&server.uri(), &dir.path().join("users.json"));
        let mut term = ScriptedTerminal::default();

        let users = manager.fetch_non_active_users(&mut term).await;

        assert_eq!(users.len(), 50);
        assert!(term.printed("Error fetching users: 500 - boom"));
        assert!(term.printed("Found 50 inactive users"));
    }

    #[tokio::test]
    async fn test_fetch_transport_error_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_for("http://127.0.0.1:1", &dir.path().join("users.json"));
        let mut term = ScriptedTerminal::default();

        let users = manager.fetch_non_active_users(&mut term).await;
        assert!(users.is_empty());
        assert!(term.printed("Error fetching users:"));
    }

    #[tokio::test]
    async fn test_delete_user_success_and_failure() {
        let server = MockServer::start().await;
        mount_delete(&server, "acc-1", 204, 1).await;
        mount_delete(&server, "acc-2", 400, 1).await;
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_for(&server.uri(), &dir.path().join("users.json"));
        let mut term = ScriptedTerminal::default();

        assert!(manager.delete_user(&mut term, "acc-1", "User One").await);
        assert!(!manager.delete_user(&mut term, "acc-2", "User Two").await);
        assert!(term.printed("✓ Deleted: User One"));
        assert!(term.printed("✗ Failed to delete User Two: 400 - bad request"));
    }

    #[tokio::test]
    async fn test_delete_user_transport_error_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager_for("http://127.0.0.1:1", &dir.path().join("users.json"));
        let mut term = ScriptedTerminal::default();

        assert!(!manager.delete_user(&mut term, "acc-1", "User One").await);
        assert!(term.printed("✗ Error deleting User One:"));
    }

    #[tokio::test]
    async fn test_batch_counts_match_summary() {
        let server = MockServer::start().await;
        mount_delete(&server, "acc-1", 204, 1).await;
        mount_delete(&server, "acc-2", 400, 1).await;
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("users.json");
        store::save_users(&file, &[record("acc-1", "User One"), record("acc-2", "User Two")]).unwrap();
        let manager = manager_for(&server.uri(), &file);
        let mut term = ScriptedTerminal::new(["DELETE", "y"]);

        let outcome = manager.delete_users_from_file(&mut term).await.unwrap();

        assert_eq!(
            outcome,
            DeletionOutcome::Completed(DeletionSummary {
                succeeded: 1,
                failed: 1,
                total: 2
            })
        );
        assert!(term.printed("✓ Successfully deleted: 1"));
        assert!(term.printed("✗ Failed to delete: 1"));
        assert!(term.printed("Total processed: 2"));
    }

    #[tokio::test]
    async fn test_batch_requires_exact_delete_word() {
        for answer in ["delete", "DELETE!", "yes", ""] {
            let server = MockServer::start().await;
            Mock::given(method("DELETE"))
                .respond_with(ResponseTemplate::new(204))
                .expect(0)
                .mount(&server)
                .await;
            let dir = tempfile::tempdir().unwrap();
            let file = dir.path().join("users.json");
            store::save_users(&file, &[record("acc-1", "User One")]).unwrap();
            let manager = manager_for(&server.uri(), &file);
            let mut term = ScriptedTerminal::new([answer]);

            let outcome = manager.delete_users_from_file(&mut term).await.unwrap();

            assert_eq!(outcome, DeletionOutcome::Cancelled);
            assert!(term.printed("Deletion cancelled."));
            // 第二道确认不会出现
            assert_eq!(term.prompts().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_batch_second_gate_defaults_to_no() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("users.json");
        store::save_users(&file, &[record("acc-1", "User One")]).unwrap();
        let manager = manager_for(&server.uri(), &file);
        let mut term = ScriptedTerminal::new(["DELETE", ""]);

        let outcome = manager.delete_users_from_file(&mut term).await.unwrap();
        assert_eq!(outcome, DeletionOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_batch_skips_records_without_account_id_and_continues() {
        let server = MockServer::start().await;
        mount_delete(&server, "acc-1", 500, 1).await;
        mount_delete(&server, "acc-3", 204, 1).await;
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("users.json");
        let no_id = UserRecord {
            display_name: Some("Ghost".to_string()),
            ..UserRecord::default()
        };
        store::save_users(&file, &[record("acc-1", "A"), no_id, record("acc-3", "C")]).unwrap();
        let manager = manager_for(&server.uri(), &file);
        let mut term = ScriptedTerminal::new(["DELETE", "Y"]);

        let outcome = manager.delete_users_from_file(&mut term).await.unwrap();

        assert_eq!(
            outcome,
            DeletionOutcome::Completed(DeletionSummary {
                succeeded: 1,
                failed: 2,
                total: 3
            })
        );
        assert!(term.printed("✗ Skipping Ghost: No account ID"));
    }

    #[tokio::test]
    async fn test_batch_preview_shows_first_ten() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("users.json");
        let mut users: Vec<UserRecord> = (1..=12).map(|i| record(&format!("acc-{}", i), &format!("User {}", i))).collect();
        users[0].email_address = None;
        users[1].display_name = None;
        store::save_users(&file, &users).unwrap();
        let manager = manager_for("http://127.0.0.1:1", &file);
        let mut term = ScriptedTerminal::new(["no"]);

        manager.delete_users_from_file(&mut term).await.unwrap();

        assert!(term.printed("Found 12 users to delete."));
        assert!(term.output().iter().any(|l| l == " 1. User 1 (No email)"));
        assert!(term.output().iter().any(|l| l == " 2. Unknown (acc-2@example.com)"));
        assert!(term.output().iter().any(|l| l == "10. User 10 (acc-10@example.com)"));
        assert!(!term.printed("User 11 ("));
        assert!(term.printed("... and 2 more users"));
    }

    #[tokio::test]
    async fn test_batch_missing_and_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("users.json");
        let manager = manager_for("http://127.0.0.1:1", &file);
        let mut term = ScriptedTerminal::default();

        let outcome = manager.delete_users_from_file(&mut term).await.unwrap();
        assert_eq!(outcome, DeletionOutcome::MissingFile);
        assert!(term.printed("not found!"));

        store::save_users(&file, &[]).unwrap();
        let outcome = manager.delete_users_from_file(&mut term).await.unwrap();
        assert_eq!(outcome, DeletionOutcome::NothingToDelete);
        assert!(term.prompts().is_empty());

        std::fs::write(&file, "{ broken").unwrap();
        let outcome = manager.delete_users_from_file(&mut term).await.unwrap();
        assert_eq!(outcome, DeletionOutcome::Unreadable);
    }

    #[test]
    fn test_review_uses_viewer_and_falls_back_to_manual() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("users.json");
        let manager = manager_for("http://127.0.0.1:1", &file);
        let mut term = ScriptedTerminal::default();

        let viewer = RecordingViewer::default();
        manager.open_file_for_review(&mut term, &viewer);
        assert!(viewer.opened.borrow().is_empty());
        assert!(term.printed("not found!"));

        store::save_users(&file, &[record("acc-1", "A")]).unwrap();
        manager.open_file_for_review(&mut term, &viewer);
        assert_eq!(viewer.opened.borrow().as_slice(), &[file.clone()]);

        let failing = RecordingViewer::failing();
        manager.open_file_for_review(&mut term, &failing);
        assert!(term.printed("Could not automatically open file: xdg-open not found"));
        assert!(term.printed(&format!("Please manually review the file: {}", file.display())));
    }
}
