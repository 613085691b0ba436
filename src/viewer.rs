//! 用系统默认程序打开导出文件

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};

/// 外部查看器能力
pub trait Viewer {
    fn open(&self, path: &Path) -> Result<()>;
}

/// 按平台选择查看器：macOS TextEdit，Linux xdg-open，Windows start
#[derive(Debug, Default)]
pub struct SystemViewer;

const NO_ARGS: &[&str] = &[];
const MACOS_ARGS: &[&str] = &["-a", "TextEdit"];
const WINDOWS_ARGS: &[&str] = &["/C", "start", ""];

/// 平台查看器命令（程序名与前置参数），不支持的平台返回 None
fn platform_command() -> Option<(&'static str, &'static [&'static str])> {
    if cfg!(target_os = "macos") {
        Some(("open", MACOS_ARGS))
    } else if cfg!(target_os = "linux") {
        Some(("xdg-open", NO_ARGS))
    } else if cfg!(target_os = "windows") {
        Some(("cmd", WINDOWS_ARGS))
    } else {
        None
    }
}

impl SystemViewer {
    fn resolve(&self) -> Result<(PathBuf, &'static [&'static str])> {
        let Some((program, args)) = platform_command() else {
            bail!("no file viewer known for this platform");
        };
        let program = which::which(program).with_context(|| format!("{} not found", program))?;
        Ok((program, args))
    }
}

impl Viewer for SystemViewer {
    fn open(&self, path: &Path) -> Result<()> {
        let (program, args) = self.resolve()?;
        tracing::debug!("打开文件: {} {:?} {}", program.display(), args, path.display());

        let status = Command::new(&program)
            .args(args)
            .arg(path)
            .status()
            .with_context(|| format!("failed to launch {}", program.display()))?;

        if !status.success() {
            bail!("{} exited with {}", program.display(), status);
        }
        Ok(())
    }
}
