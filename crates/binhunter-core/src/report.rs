//! 控制台输出格式（进度行与汇总）
use std::io::{self, Write};

use crate::types::{FileRecord, HashOutcome, ScanResult};

/// 单文件进度行，后跟一个空行
pub fn write_progress(out: &mut dyn Write, record: &FileRecord) -> io::Result<()> {
    match &record.outcome {
        HashOutcome::Hashed(d) => {
            write!(out, "Hash of {} MD5: {} SHA: {}\n\n", record.name, d.md5, d.sha256)
        }
        HashOutcome::Unreadable { reason } => {
            write!(out, "Hash of {} unreadable: {}\n\n", record.name, reason)
        }
    }
}

/// 扫描结束后的汇总
pub fn write_summary(out: &mut dyn Write, result: &ScanResult) -> io::Result<()> {
    writeln!(
        out,
        "Total files: {}\nEXEs: {}\nDLLs: {}",
        result.total(),
        result.executable_count,
        result.library_count
    )
}
