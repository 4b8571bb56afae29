//! 扩展名过滤（固定集合：.exe / .dll）
use crate::types::FileKind;

pub(crate) const EXE_EXT: &str = ".exe";
pub(crate) const DLL_EXT: &str = ".dll";

/// 按文件名最后一个 `.` 之后的后缀（含点、区分大小写）分类
/// - `a.exe` → Executable；`b.dll` → Library
/// - `A.EXE`、`c.txt`、`noext` → None
/// - `.exe`（只有后缀的隐藏文件）也算 Executable
pub fn classify(name: &str) -> Option<FileKind> {
    let ext = match name.rfind('.') {
        Some(i) => &name[i..],
        None => return None,
    };
    match ext {
        EXE_EXT => Some(FileKind::Executable),
        DLL_EXT => Some(FileKind::Library),
        _ => None,
    }
}
