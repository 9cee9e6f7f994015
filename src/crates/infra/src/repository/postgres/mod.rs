//! 基于 sea-orm 的仓储实现
//!
//! 生产环境连接 postgres，测试使用内存 sqlite，查询全部通过 sea-orm 构建，不拼接 SQL。

pub mod command;
pub mod query;

#[cfg(test)]
pub(crate) mod test_support;
