//! # 批量处理模块
//!
//! 将一个目录下的每幅图像作为独立任务并行处理。
//!
//! ## 功能
//! - 收集可识别扩展名的图像文件
//! - 前置条件校验
//! - 固定大小线程池并行处理
//! - 共享进度与观察者通知
//! - 结果统计与 CSV 报告
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `filters/` 施加滤镜

pub mod collector;
pub mod progress;
pub mod report;
pub mod runner;
pub mod worker;

pub use collector::FileCollector;
pub use progress::{NoopSink, ProgressEvent, ProgressSink, RunProgress, RunState};
pub use runner::{BatchRunner, RunSummary};
