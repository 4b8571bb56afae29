//! 扫描主流程与并行调度
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::digest::digest_file;
use crate::error::{Result, ScanError};
use crate::filter::classify;
use crate::options::ScanOptions;
use crate::report::{write_progress, write_summary};
use crate::types::{FileKind, FileRecord, HashOutcome, ScanResult};

/// 遍历得到的待哈希文件
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) path: PathBuf,
    pub(crate) name: String,
    pub(crate) kind: FileKind,
}

/// 扫描目录，逐文件写进度行，最后写汇总
/// 顺序保证：
/// - 记录与进度行均按遍历顺序（先序深度优先，不排序）
/// - 并行模式下由单线程 writer 按序号重排，输出与串行一致
///
/// 根目录不可用、或遍历中任一目录无法列出时整体失败，不返回部分结果；
/// 失败前已哈希的文件的进度行保留在 `out` 中（串行、并行相同）。
/// 单个文件打不开/读失败记为 `Unreadable`，扫描继续。
pub fn scan(opts: &ScanOptions, out: &mut dyn Write) -> Result<ScanResult> {
    let root = opts.root.as_path();
    check_root(root)?;

    let threads = opts.effective_threads();
    info!(root = %root.display(), threads, "starting scan");

    let result = if threads > 1 {
        scan_parallel(root, candidates(root), out, threads)?
    } else {
        fold_serial(root, candidates(root), out)?
    };

    write_summary(out, &result)?;
    out.flush()?;

    info!(
        total = result.total(),
        exes = result.executable_count,
        dlls = result.library_count,
        unreadable = result.unreadable_count(),
        "scan finished"
    );
    Ok(result)
}

/// 根路径必须存在且是目录
fn check_root(root: &Path) -> Result<()> {
    let md = std::fs::metadata(root)
        .map_err(|source| ScanError::RootNotFound { root: root.to_path_buf(), source })?;
    if !md.is_dir() {
        return Err(ScanError::NotADirectory { root: root.to_path_buf() });
    }
    Ok(())
}

/// 惰性遍历：只产出扩展名命中的普通文件；目录列举失败原样上抛
pub(crate) fn candidates(root: &Path) -> impl Iterator<Item = Result<Candidate>> + '_ {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(source) => {
                    let path = source.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                    return Some(Err(ScanError::Walk { root: root.to_path_buf(), path, source }));
                }
            };
            if !entry.file_type().is_file() { return None; }
            let name = entry.file_name().to_string_lossy().into_owned();
            let kind = classify(&name)?;
            Some(Ok(Candidate { path: entry.into_path(), name, kind }))
        })
}

/// 计算单文件摘要；打开或读取失败时记为 Unreadable
pub(crate) fn hash_candidate(cand: &Candidate) -> FileRecord {
    let outcome = match digest_file(&cand.path) {
        Ok(d) => {
            debug!(path = %cand.path.display(), md5 = %d.md5, "hashed");
            HashOutcome::Hashed(d)
        }
        Err(e) => {
            warn!(path = %cand.path.display(), error = %e, "file unreadable");
            HashOutcome::Unreadable { reason: e.to_string() }
        }
    };
    FileRecord {
        name: cand.name.clone(),
        path: cand.path.display().to_string(),
        kind: cand.kind,
        outcome,
    }
}

/// 串行路径：边遍历边哈希，每个文件立即输出
pub(crate) fn fold_serial<I>(root: &Path, files: I, out: &mut dyn Write) -> Result<ScanResult>
where
    I: Iterator<Item = Result<Candidate>>,
{
    files.into_iter().try_fold(ScanResult::new(root), |acc, cand| -> Result<ScanResult> {
        let record = hash_candidate(&cand?);
        write_progress(out, &record)?;
        Ok(acc.with_record(record))
    })
}

/// 并行调度（三段流水线）：
/// - Walker 线程边遍历边把 `(序号, Candidate)` 送入有界 channel，遇到致命错误即停止
/// - Rayon 线程池从 channel 取任务并行哈希，结果带序号发回
/// - 当前线程作为唯一 writer，按序号重排后流式输出（遍历进行中即开始输出）
pub(crate) fn scan_parallel<I>(root: &Path, files: I, out: &mut dyn Write, threads: usize) -> Result<ScanResult>
where
    I: Iterator<Item = Result<Candidate>> + Send,
{
    use crossbeam_channel as channel;
    use rayon::iter::{ParallelBridge, ParallelIterator};
    use std::sync::atomic::{AtomicBool, Ordering};

    let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, "failed to build thread pool, hashing serially");
            return fold_serial(root, files, out);
        }
    };

    let (cand_tx, cand_rx) = channel::bounded::<(usize, Candidate)>(256);
    let (rec_tx, rec_rx) = channel::bounded::<(usize, FileRecord)>(256);
    let stop = AtomicBool::new(false);
    let mut ordered: Vec<FileRecord> = Vec::new();

    std::thread::scope(|s| -> Result<()> {
        let stop = &stop;
        let walker = s.spawn(move || -> Result<()> {
            for (idx, cand) in files.enumerate() {
                if stop.load(Ordering::Relaxed) { break; }
                // 出错即返回；cand_tx 随之丢弃，下游自然收尾
                if cand_tx.send((idx, cand?)).is_err() { break; }
            }
            Ok(())
        });

        s.spawn(move || {
            pool.install(|| {
                cand_rx.into_iter().par_bridge().for_each_with(rec_tx, |tx, (idx, cand)| {
                    // writer 提前退出时接收端已关闭，忽略发送失败
                    let _ = tx.send((idx, hash_candidate(&cand)));
                });
            });
        });

        let written = write_in_order(rec_rx, out, &mut ordered);
        if written.is_err() {
            stop.store(true, Ordering::Relaxed);
        }
        let walked = match walker.join() {
            Ok(r) => r,
            Err(panic) => std::panic::resume_unwind(panic),
        };
        written?;
        walked
    })?;

    Ok(ordered.into_iter().fold(ScanResult::new(root), ScanResult::with_record))
}

/// Writer：维护 next_idx 与缓存，按序输出；rx 按值消费，出错返回时随之关闭
fn write_in_order(
    rx: crossbeam_channel::Receiver<(usize, FileRecord)>,
    out: &mut dyn Write,
    ordered: &mut Vec<FileRecord>,
) -> Result<()> {
    let mut next_idx: usize = 0;
    let mut buffer: BTreeMap<usize, FileRecord> = BTreeMap::new();
    for (idx, record) in rx {
        buffer.insert(idx, record);
        while let Some(record) = buffer.remove(&next_idx) {
            write_progress(out, &record)?;
            ordered.push(record);
            next_idx += 1;
        }
    }
    Ok(())
}
