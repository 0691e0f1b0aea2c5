use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::Once;
use std::sync::OnceLock;

// 전역 로그 파일 (init 전이거나 열기 실패 시 None)
static LOG_FILE: OnceLock<Mutex<Option<File>>> = OnceLock::new();
static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

pub struct Logger;

/// `<prefix>_result.log` next to the outputs, or `result.log` inside a directory prefix.
pub fn log_path_for(output_prefix: &str) -> PathBuf {
    let is_dir_prefix = output_prefix.ends_with('/');
    let trimmed = output_prefix.trim_end_matches('/');
    let path = Path::new(trimmed);

    if is_dir_prefix || path.is_dir() {
        return path.join("result.log");
    }

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("lbatrace");
    dir.join(format!("{stem}_result.log"))
}

impl Logger {
    pub fn init(output_prefix: &str) {
        INIT.call_once(|| {
            let log_path = log_path_for(output_prefix);
            LOG_FILE.get_or_init(|| Mutex::new(open_log_file(&log_path)));
        });
    }

    pub fn log(message: &str) {
        Self::write(LogLevel::Info, message);
    }

    pub fn log_error(message: &str) {
        Self::write(LogLevel::Error, message);
    }

    pub fn write(level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => println!("{message}"),
            LogLevel::Error => eprintln!("{message}"),
        }

        let Some(logger) = LOG_FILE.get() else {
            return;
        };
        if let Ok(mut guard) = logger.lock() {
            if let Some(file) = guard.as_mut() {
                let result = match level {
                    LogLevel::Info => writeln!(file, "{message}"),
                    LogLevel::Error => writeln!(file, "ERROR: {message}"),
                };
                if let Err(e) = result {
                    eprintln!("로그 파일 쓰기 실패: {e}");
                }
            }
        }
    }

    pub fn flush() -> std::io::Result<()> {
        if let Some(logger) = LOG_FILE.get() {
            if let Ok(mut guard) = logger.lock() {
                if let Some(file) = guard.as_mut() {
                    file.flush()?;
                }
            }
        }
        Ok(())
    }
}

fn open_log_file(log_path: &Path) -> Option<File> {
    let log_dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    if !log_dir.as_os_str().is_empty() && !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(log_dir) {
            eprintln!("로그 디렉토리를 생성할 수 없습니다: {e}");
            return None;
        }
    }

    match OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(log_path)
    {
        Ok(file) => {
            println!("로그를 '{}'에 저장합니다.", log_path.display());
            Some(file)
        }
        Err(e) => {
            eprintln!("로그 파일을 열 수 없습니다: {e}");
            None
        }
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::utils::Logger::log(&message);
    }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::utils::Logger::log_error(&message);
    }};
}
