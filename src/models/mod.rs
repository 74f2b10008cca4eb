//! # 数据模型模块
//!
//! 定义运行配置、图像任务和任务结果。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: config, task

pub mod config;
pub mod task;

pub use config::{RunConfig, DEFAULT_OUTPUT_ROOT};
pub use task::{ImageTask, TaskResult};
