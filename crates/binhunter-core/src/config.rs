//! 配置文件加载（TOML）
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};
use crate::options::parse_threads;

/// 线程配置：整数或 "auto"
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum ThreadsEntry {
    Count(usize),
    Named(String),
}

/// 顶层配置文件结构（所有键可选）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    root: Option<PathBuf>,
    #[serde(default)]
    threads: Option<ThreadsEntry>,
}

/// 归一化后的配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    /// None 表示自动
    pub threads: Option<usize>,
}

impl FileConfig {
    /// 从 TOML 文本解析；`path` 仅用于错误信息
    pub fn from_toml_str(txt: &str, path: &Path) -> Result<Self> {
        let parsed: ConfigFile = toml::from_str(txt)
            .map_err(|source| ScanError::ConfigParse { path: path.to_path_buf(), source })?;

        let threads = match parsed.threads {
            Some(ThreadsEntry::Count(n)) if n >= 1 => Some(n),
            Some(ThreadsEntry::Named(s)) => parse_threads(&s),
            _ => None,
        };

        Ok(Self { root: parsed.root, threads })
    }
}

/// 读取并解析配置文件
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let txt = std::fs::read_to_string(path)
        .map_err(|source| ScanError::Config { path: path.to_path_buf(), source })?;
    FileConfig::from_toml_str(&txt, path)
}
