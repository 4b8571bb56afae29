//! 公共类型（对外暴露）
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 命中文件的类别（由扩展名决定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// `.exe`
    Executable,
    /// `.dll`
    Library,
}

/// 单个文件的两种摘要（小写十六进制）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Digests {
    /// MD5，32 个十六进制字符
    pub md5: String,
    /// SHA-256，64 个十六进制字符
    pub sha256: String,
}

/// 单文件哈希结果：要么算出摘要，要么明确标记为不可读
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HashOutcome {
    Hashed(Digests),
    Unreadable { reason: String },
}

impl HashOutcome {
    pub fn digests(&self) -> Option<&Digests> {
        match self {
            HashOutcome::Hashed(d) => Some(d),
            HashOutcome::Unreadable { .. } => None,
        }
    }
}

/// 一条命中记录（构造后不可变）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// 文件名（不含目录）
    pub name: String,
    /// 遍历时遇到的完整路径
    pub path: String,
    pub kind: FileKind,
    #[serde(flatten)]
    pub outcome: HashOutcome,
}

/// 一次扫描的聚合结果
///
/// 通过 `with_record` 折叠构建；分片结果可用 `merge` 合并（记录拼接 + 计数相加）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub root: PathBuf,
    pub records: Vec<FileRecord>,
    pub executable_count: usize,
    pub library_count: usize,
}

impl ScanResult {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            records: Vec::new(),
            executable_count: 0,
            library_count: 0,
        }
    }

    /// 追加一条记录并累加对应计数
    pub fn with_record(mut self, record: FileRecord) -> Self {
        match record.kind {
            FileKind::Executable => self.executable_count += 1,
            FileKind::Library => self.library_count += 1,
        }
        self.records.push(record);
        self
    }

    /// 合并另一片结果（保留 self 的 root）
    pub fn merge(mut self, other: ScanResult) -> Self {
        self.executable_count += other.executable_count;
        self.library_count += other.library_count;
        self.records.extend(other.records);
        self
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn unreadable_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome.digests().is_none())
            .count()
    }
}
