//! 扫描选项与扫描根解析（模块）
use std::path::PathBuf;

/// 覆盖扫描根的环境变量名
pub const ROOT_ENV_VAR: &str = "BINHUNTER_ROOT";

/// 扫描选项
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 已解析好的扫描根
    pub root: PathBuf,
    /// 线程数：None 表示自动（等于 CPU 核数）；Some(1) 走串行
    pub threads: Option<usize>,
}

impl ScanOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), threads: None }
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// 实际使用的线程数（至少为 1）
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }
}

/// 解析扫描根
/// 优先级：显式参数 → `BINHUNTER_ROOT` → 配置文件 → 平台默认根。
/// 空字符串一律视为未设置。`env` 由调用方注入，便于测试替换。
pub fn resolve_root<F>(explicit: Option<PathBuf>, from_config: Option<PathBuf>, env: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty_path = |p: Option<PathBuf>| p.filter(|p| !p.as_os_str().is_empty());

    if let Some(p) = non_empty_path(explicit) {
        return p;
    }
    if let Some(v) = env(ROOT_ENV_VAR).filter(|v| !v.is_empty()) {
        return PathBuf::from(v);
    }
    if let Some(p) = non_empty_path(from_config) {
        return p;
    }
    default_root(&env)
}

/// 平台默认根：Windows 为系统盘根（SystemDrive → HOMEDRIVE → C:），其余为 `/`
#[cfg(windows)]
pub fn default_root<F>(env: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let drive = env("SystemDrive")
        .filter(|v| !v.is_empty())
        .or_else(|| env("HOMEDRIVE").filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "C:".to_string());
    PathBuf::from(format!("{drive}\\"))
}

#[cfg(not(windows))]
pub fn default_root<F>(_env: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    PathBuf::from("/")
}

/// 解析线程参数："auto" 表示自动；非法值或 0 也退回自动
pub fn parse_threads(s: &str) -> Option<usize> {
    if s.eq_ignore_ascii_case("auto") { return None; }
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}
