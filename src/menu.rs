//! 交互菜单
//!
//! 单线程阻塞循环，只有选择退出时才结束。

use anyhow::Result;

use crate::console::{Terminal, is_affirmative};
use crate::manager::UserManager;
use crate::viewer::Viewer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Fetch,
    Review,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Fetch),
            "2" => Some(Self::Review),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn print_menu(term: &mut dyn Terminal) {
    term.say("");
    term.say(&"=".repeat(50));
    term.say("JIRA User Management Options:");
    term.say("1. Fetch non-active users");
    term.say("2. Review saved users file");
    term.say("3. Delete users from saved file");
    term.say("4. Exit");
    term.say(&"=".repeat(50));
}

/// 运行菜单直到操作员退出；终端读写失败时返回 Err
pub async fn run(
    manager: &UserManager,
    term: &mut dyn Terminal,
    viewer: &dyn Viewer,
) -> Result<()> {
    loop {
        print_menu(term);
        let input = term.prompt("Select an option (1-4): ")?;

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Fetch) => fetch(manager, term, viewer).await?,
            Some(MenuChoice::Review) => manager.open_file_for_review(term, viewer),
            Some(MenuChoice::Delete) => {
                let outcome = manager.delete_users_from_file(term).await?;
                tracing::debug!("删除流程结束: {:?}", outcome);
            }
            Some(MenuChoice::Exit) => {
                term.say("Goodbye!");
                return Ok(());
            }
            None => term.say("Invalid choice. Please try again."),
        }
    }
}

/// 清理旧文件后重新拉取，结果非空时保存并询问是否打开
async fn fetch(manager: &UserManager, term: &mut dyn Terminal, viewer: &dyn Viewer) -> Result<()> {
    manager.remove_users_file(term);

    let users = manager.fetch_non_active_users(term).await;
    if users.is_empty() {
        term.say("No non-active users found.");
        return Ok(());
    }

    if let Err(e) = manager.save_users_to_file(term, &users) {
        tracing::error!("保存导出文件失败: {:#}", e);
        term.say(&format!("✗ {:#}", e));
        return Ok(());
    }

    let answer = term.prompt("Open file for review? [Y/n]: ")?;
    if is_affirmative(&answer) {
        manager.open_file_for_review(term, viewer);
    }
    Ok(())
}
