//! 可执行文件哈希扫描库
//!
//! 要点：
//! - 先序深度优先遍历扫描根，只处理扩展名为 `.exe` / `.dll`（区分大小写）的普通文件。
//! - 每个文件只顺序读取一次，同时计算 MD5 与 SHA-256，内存占用与文件大小无关。
//! - 单文件不可读不会中断扫描，记录为 `HashOutcome::Unreadable`；根目录或子目录无法列出则整体失败。
//! - 并行模式下输出顺序与串行一致（由单线程 writer 按遍历序号重排）。

mod config;
mod digest;
mod error;
mod filter;
mod options;
mod report;
mod scan;
mod types;

pub use config::{load_config, FileConfig};
pub use digest::{digest_bytes, digest_file, digest_reader};
pub use error::{Result, ScanError};
pub use filter::classify;
pub use options::{default_root, parse_threads, resolve_root, ScanOptions, ROOT_ENV_VAR};
pub use report::{write_progress, write_summary};
pub use scan::scan;
pub use types::{Digests, FileKind, FileRecord, HashOutcome, ScanResult};

#[cfg(test)]
mod tests;
