//! 单元测试（按模块拆分）

mod tests_digest;
mod tests_options;
