//! CLI command implementations. / CLI 命令实现。

pub mod run;
