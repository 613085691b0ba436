mod console;
mod http_client;
mod jira;
mod manager;
mod menu;
mod model;
mod session;
mod store;
mod viewer;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use console::{StdTerminal, Terminal};
use jira::client::JiraClient;
use manager::UserManager;
use model::config::Config;
use session::Session;
use viewer::SystemViewer;

/// 拉取、审阅并批量删除 Jira Cloud 中的停用用户
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = Config::default_config_path())]
    config: String,

    /// Jira 站点名（https://<domain>.atlassian.net），覆盖 JIRA_DOMAIN
    #[arg(long)]
    domain: Option<String>,

    /// 登录邮箱，覆盖 JIRA_EMAIL
    #[arg(long)]
    email: Option<String>,

    /// 导出文件路径
    #[arg(long)]
    users_file: Option<String>,
}

#[tokio::main]
async fn main() {
    // 初始化日志（输出到 stderr，避免与交互内容混在一起）
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("错误: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("已加载 .env: {}", path.display()),
        Err(e) => tracing::debug!("未加载 .env: {}", e),
    }

    let mut config = Config::load(&args.config)?;
    config.apply_env(|key| std::env::var(key).ok());
    if let Some(domain) = args.domain {
        config.domain = Some(domain);
    }
    if let Some(email) = args.email {
        config.email = Some(email);
    }
    if let Some(users_file) = args.users_file {
        config.users_file = users_file;
    }

    let mut term = StdTerminal;
    let session = Session::setup(&config, &mut term)?;

    let proxy = config.proxy();
    let http = http_client::build_client(proxy.as_ref(), config.timeout_secs, config.tls_backend)
        .context("创建 HTTP 客户端失败")?;
    let client = JiraClient::new(http, &session);
    tracing::info!("Jira 站点: {}", client.base_url());

    let manager = UserManager::new(client, &session, &config.users_file);
    tracing::debug!("导出文件: {}", manager.users_file().display());

    if !manager.test_connection(&mut term).await {
        term.say("Please check your credentials and try again.");
        anyhow::bail!("无法连接到 {}", session.base_url);
    }

    menu::run(&manager, &mut term, &SystemViewer).await
}
