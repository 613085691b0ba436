//! 终端交互
//!
//! 所有面向操作员的输出与输入都经过 [`Terminal`]，
//! 业务流程因此可以在没有真实终端的情况下测试。

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// 终端能力
pub trait Terminal {
    /// 输出一行
    fn say(&mut self, line: &str);

    /// 显示提示并读取一行（已去除首尾空白）
    ///
    /// 输入流结束时返回 `UnexpectedEof`
    fn prompt(&mut self, message: &str) -> io::Result<String>;

    /// 不回显地读取一行
    fn prompt_secret(&mut self, message: &str) -> io::Result<String>;
}

/// `[Y/n]` 风格提示：空、`y`、`yes` 视为同意
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

/// 标准输入输出
#[derive(Debug, Default)]
pub struct StdTerminal;

impl StdTerminal {
    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(line.trim().to_string())
    }
}

impl Terminal for StdTerminal {
    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        print!("{}", message);
        io::stdout().flush()?;
        self.read_line()
    }

    fn prompt_secret(&mut self, message: &str) -> io::Result<String> {
        print!("{}", message);
        io::stdout().flush()?;

        if !io::stdin().is_terminal() {
            // 管道输入没有回显可言
            tracing::debug!("stdin 不是终端，按普通行读取 Token");
            return self.read_line();
        }

        enable_raw_mode()?;
        let secret = read_secret_keys();
        disable_raw_mode()?;
        println!();
        secret
    }
}

/// raw mode 下逐键读取，Enter 结束，Ctrl-C 中断
fn read_secret_keys() -> io::Result<String> {
    let mut secret = String::new();
    loop {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read()?
        else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }

        match code {
            KeyCode::Enter => return Ok(secret),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "input cancelled"));
            }
            KeyCode::Char(c) => secret.push(c),
            KeyCode::Backspace => {
                secret.pop();
            }
            _ => {}
        }
    }
}
