//! 流式摘要测试

#![allow(clippy::expect_used)]

use crate::digest::{digest_bytes, digest_file, digest_reader, READ_BUF_SIZE};
use std::fs;
use std::io::{self, Read};
use tempfile::TempDir;

const EMPTY_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";
const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const ABC_MD5: &str = "900150983cd24fb0d6963f7d28e17f72";
const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

/// 每次最多返回 `step` 字节的 reader，模拟分块读取
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn test_digest_bytes_known_vectors() {
    let empty = digest_bytes(b"");
    assert_eq!(empty.md5, EMPTY_MD5);
    assert_eq!(empty.sha256, EMPTY_SHA256);

    let abc = digest_bytes(b"abc");
    assert_eq!(abc.md5, ABC_MD5);
    assert_eq!(abc.sha256, ABC_SHA256);
}

#[test]
fn test_digest_file_known_vectors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let empty = temp_dir.path().join("empty.exe");
    let abc = temp_dir.path().join("abc.dll");
    fs::write(&empty, b"").expect("Failed to write file");
    fs::write(&abc, b"abc").expect("Failed to write file");

    let d = digest_file(&empty).expect("Failed to hash");
    assert_eq!(d.md5, EMPTY_MD5);
    assert_eq!(d.sha256, EMPTY_SHA256);

    let d = digest_file(&abc).expect("Failed to hash");
    assert_eq!(d.md5, ABC_MD5);
    assert_eq!(d.sha256, ABC_SHA256);
}

#[test]
fn test_digest_reader_matches_whole_buffer_across_chunks() {
    let data: Vec<u8> = (0..(READ_BUF_SIZE * 3 + 17)).map(|i| (i % 251) as u8).collect();
    let streamed = digest_reader(Trickle { data: &data, step: 1000 }).expect("Failed to hash");
    assert_eq!(streamed, digest_bytes(&data));
}

#[test]
fn test_digest_is_lowercase_fixed_width_hex() {
    let d = digest_bytes(b"\x00\xffMZ");
    assert_eq!(d.md5.len(), 32);
    assert_eq!(d.sha256.len(), 64);
    assert!(d.md5.chars().chain(d.sha256.chars()).all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn test_digest_file_missing_is_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    assert!(digest_file(&temp_dir.path().join("gone.exe")).is_err());
}
