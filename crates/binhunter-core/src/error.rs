//! 错误类型（对外暴露）
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 扫描过程中的致命错误
///
/// 单个文件打不开/读失败不在此列，它们记录为 `HashOutcome::Unreadable`。
#[derive(Debug, Error)]
pub enum ScanError {
    /// 根目录不存在或无法 stat
    #[error("unable to parse path: {root}: {source}")]
    RootNotFound {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 根路径存在但不是目录
    #[error("unable to parse path: {root}: not a directory")]
    NotADirectory { root: PathBuf },

    /// 遍历途中无法列出某个目录（包括根目录自身）
    #[error("unable to parse path: {root}: cannot list {path}: {source}")]
    Walk {
        root: PathBuf,
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// 写出进度/汇总失败
    #[error("failed to write scan output: {source}")]
    Output {
        #[from]
        source: io::Error,
    },

    /// 配置文件读取失败
    #[error("failed to read config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 配置文件解析失败
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T, E = ScanError> = std::result::Result<T, E>;
