//! # filterbatch 库
//!
//! 批处理核心：滤镜分发（`filters`）与批量执行器（`batch`）。
//! 进度观察接口（`RunProgress` 轮询 / `ProgressSink` 推送）供外部展示层使用，
//! 命令行前端见 `main.rs`。

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod filters;
pub mod models;
pub mod utils;

#[cfg(test)]
mod testutil;

pub use batch::{BatchRunner, ProgressEvent, ProgressSink, RunProgress, RunState, RunSummary};
pub use error::{FilterBatchError, Result};
pub use filters::{apply, apply_named, Algorithm};
pub use models::{ImageTask, RunConfig, TaskResult};
