//! 扫描根解析与线程参数测试

use crate::options::{default_root, parse_threads, resolve_root, ScanOptions, ROOT_ENV_VAR};
use std::collections::HashMap;
use std::path::PathBuf;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |k: &str| map.get(k).cloned()
}

#[test]
fn test_explicit_root_wins() {
    let env = env_from(&[(ROOT_ENV_VAR, "/from/env")]);
    let root = resolve_root(Some(PathBuf::from("/explicit")), Some(PathBuf::from("/from/config")), env);
    assert_eq!(root, PathBuf::from("/explicit"));
}

#[test]
fn test_env_beats_config() {
    let env = env_from(&[(ROOT_ENV_VAR, "/from/env")]);
    let root = resolve_root(None, Some(PathBuf::from("/from/config")), env);
    assert_eq!(root, PathBuf::from("/from/env"));
}

#[test]
fn test_config_used_when_no_explicit_or_env() {
    let root = resolve_root(None, Some(PathBuf::from("/from/config")), env_from(&[]));
    assert_eq!(root, PathBuf::from("/from/config"));
}

#[test]
fn test_empty_values_fall_through_to_default() {
    let env = env_from(&[(ROOT_ENV_VAR, "")]);
    let root = resolve_root(Some(PathBuf::new()), Some(PathBuf::new()), &env);
    assert_eq!(root, default_root(&env));
}

#[cfg(not(windows))]
#[test]
fn test_default_root_is_filesystem_root() {
    assert_eq!(default_root(&env_from(&[])), PathBuf::from("/"));
}

#[cfg(windows)]
#[test]
fn test_default_root_uses_system_drive() {
    assert_eq!(default_root(&env_from(&[("SystemDrive", "D:")])), PathBuf::from("D:\\"));
    assert_eq!(default_root(&env_from(&[("HOMEDRIVE", "E:")])), PathBuf::from("E:\\"));
    assert_eq!(default_root(&env_from(&[])), PathBuf::from("C:\\"));
}

#[test]
fn test_parse_threads() {
    assert_eq!(parse_threads("auto"), None);
    assert_eq!(parse_threads("AUTO"), None);
    assert_eq!(parse_threads("4"), Some(4));
    assert_eq!(parse_threads("0"), None);
    assert_eq!(parse_threads("many"), None);
}

#[test]
fn test_effective_threads_is_at_least_one() {
    assert_eq!(ScanOptions::new("/").with_threads(Some(1)).effective_threads(), 1);
    assert_eq!(ScanOptions::new("/").with_threads(Some(3)).effective_threads(), 3);
    assert!(ScanOptions::new("/").effective_threads() >= 1);
}
