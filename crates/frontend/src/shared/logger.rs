//! Уровневый логгер приложения.
//!
//! Каждая принятая запись уходит в консоль через крейт `log` и дублируется
//! в `localStorage` (ключ `appLogs`) в виде кольцевого буфера на 100 записей:
//! самая старая запись вытесняется первой.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::shared::storage;

pub const LOG_STORAGE_KEY: &str = "appLogs";
pub const LOG_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }
}

static MIN_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

pub fn set_min_level(level: LogLevel) {
    MIN_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Fatal пишется всегда, остальные уровни — не ниже порога.
fn passes(level: LogLevel, min: LogLevel) -> bool {
    level == LogLevel::Fatal || level >= min
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Кольцевой буфер записей, кап [`LOG_CAPACITY`].
#[derive(Debug, Default)]
pub struct LogBuffer {
    entries: Vec<LogEntry>,
}

impl LogBuffer {
    /// Восстанавливает буфер из JSON; мусор в хранилище даёт пустой буфер.
    pub fn from_json(raw: &str) -> Self {
        Self {
            entries: serde_json::from_str(raw).unwrap_or_default(),
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
        if self.entries.len() > LOG_CAPACITY {
            self.entries.remove(0);
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn log(level: LogLevel, message: &str, data: Option<Value>) {
    let min = match MIN_LEVEL.load(Ordering::Relaxed) {
        0 => LogLevel::Debug,
        1 => LogLevel::Info,
        2 => LogLevel::Warn,
        3 => LogLevel::Error,
        _ => LogLevel::Fatal,
    };
    if !passes(level, min) {
        return;
    }

    let line = match &data {
        Some(value) => format!("[{}] {} {}", level.as_str(), message, value),
        None => format!("[{}] {}", level.as_str(), message),
    };
    match level {
        LogLevel::Debug => log::debug!("{}", line),
        LogLevel::Info => log::info!("{}", line),
        LogLevel::Warn => log::warn!("{}", line),
        LogLevel::Error | LogLevel::Fatal => log::error!("{}", line),
    }

    store_entry(level, message, data);
}

pub fn debug(message: &str, data: Option<Value>) {
    log(LogLevel::Debug, message, data);
}

pub fn info(message: &str, data: Option<Value>) {
    log(LogLevel::Info, message, data);
}

pub fn warn(message: &str, data: Option<Value>) {
    log(LogLevel::Warn, message, data);
}

pub fn error(message: &str, data: Option<Value>) {
    log(LogLevel::Error, message, data);
}

pub fn fatal(message: &str, data: Option<Value>) {
    log(LogLevel::Fatal, message, data);
}

pub fn get_logs() -> Vec<LogEntry> {
    let raw = storage::get_item(LOG_STORAGE_KEY).unwrap_or_else(|| "[]".to_string());
    LogBuffer::from_json(&raw).entries.clone()
}

pub fn clear_logs() {
    storage::remove_item(LOG_STORAGE_KEY);
}

fn store_entry(level: LogLevel, message: &str, data: Option<Value>) {
    let raw = storage::get_item(LOG_STORAGE_KEY).unwrap_or_else(|| "[]".to_string());
    let mut buffer = LogBuffer::from_json(&raw);
    buffer.push(LogEntry {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        level: level.as_str().to_string(),
        message: message.to_string(),
        data,
    });
    storage::set_item(LOG_STORAGE_KEY, &buffer.to_json());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: "2026-01-01T00:00:00.000Z".to_string(),
            level: "INFO".to_string(),
            message: message.to_string(),
            data: None,
        }
    }

    #[test]
    fn buffer_never_exceeds_capacity() {
        let mut buffer = LogBuffer::default();
        for i in 0..LOG_CAPACITY {
            buffer.push(entry(&format!("msg-{}", i)));
        }
        assert_eq!(buffer.len(), LOG_CAPACITY);

        buffer.push(entry("msg-overflow"));
        assert_eq!(buffer.len(), LOG_CAPACITY);
        // 101-я запись вытесняет самую старую
        assert_eq!(buffer.entries()[0].message, "msg-1");
        assert_eq!(
            buffer.entries()[LOG_CAPACITY - 1].message,
            "msg-overflow"
        );
    }

    #[test]
    fn garbage_storage_yields_empty_buffer() {
        assert!(LogBuffer::from_json("not json at all").is_empty());
        assert!(LogBuffer::from_json("").is_empty());
    }

    #[test]
    fn roundtrips_through_json() {
        let mut buffer = LogBuffer::default();
        buffer.push(entry("hello"));
        let restored = LogBuffer::from_json(&buffer.to_json());
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.entries()[0].message, "hello");
    }

    #[test]
    fn threshold_filters_lower_levels() {
        assert!(!passes(LogLevel::Debug, LogLevel::Info));
        assert!(passes(LogLevel::Info, LogLevel::Info));
        assert!(passes(LogLevel::Error, LogLevel::Info));
        // Fatal проходит при любом пороге
        assert!(passes(LogLevel::Fatal, LogLevel::Fatal));
        assert!(passes(LogLevel::Fatal, LogLevel::Error));
    }
}
