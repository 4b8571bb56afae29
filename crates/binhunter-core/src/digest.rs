//! 流式摘要：一次顺序读取同时喂给 MD5 与 SHA-256
use md5::{Digest, Md5};
use sha2::Sha256;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::types::Digests;

/// 读缓冲大小（字节）；内存占用与文件大小无关
pub(crate) const READ_BUF_SIZE: usize = 64 * 1024; // 64 KiB

/// 从任意 reader 读到 EOF，返回两种摘要
pub fn digest_reader<R: Read>(mut reader: R) -> io::Result<Digests> {
    let mut md5 = Md5::new();
    let mut sha = Sha256::new();
    let mut buf = vec![0u8; READ_BUF_SIZE];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        md5.update(&buf[..n]);
        sha.update(&buf[..n]);
    }

    Ok(Digests {
        md5: hex::encode(md5.finalize()),
        sha256: hex::encode(sha.finalize()),
    })
}

/// 打开文件并计算摘要；句柄在返回前关闭
pub fn digest_file(path: &Path) -> io::Result<Digests> {
    let file = File::open(path)?;
    digest_reader(file)
}

/// 内存数据的摘要（测试与校验用）
pub fn digest_bytes(data: &[u8]) -> Digests {
    let md5 = Md5::digest(data);
    let sha = Sha256::digest(data);
    Digests {
        md5: hex::encode(md5),
        sha256: hex::encode(sha),
    }
}
