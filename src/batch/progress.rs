//! # 运行进度
//!
//! 一次运行的共享进度计数与状态机，以及进度事件观察接口。
//!
//! ## 状态机
//! ```text
//! Idle → Validating → Running → Completed
//!            └──────→ Failed(reason)
//! ```
//!
//! ## 功能
//! - 完成计数只在任务结束时递增，互斥更新，不超过总数
//! - 任意线程可读取进度比例与状态（轮询）
//! - `ProgressSink` 接收逐事件通知（推送）
//! - 协作式取消：未开始的任务被跳过，进行中的任务照常完成
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 更新
//! - 被 `commands/process.rs` 观察

use crate::models::TaskResult;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// 运行状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Validating,
    Running,
    Completed,
    Failed(String),
}

impl RunState {
    /// 是否为终止状态
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed(_))
    }
}

/// 进度快照
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub state: RunState,
    pub total: usize,
    pub completed: usize,
    pub success: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl ProgressSnapshot {
    /// 完成比例，范围 [0, 1]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// 共享运行进度
#[derive(Debug, Default)]
pub struct RunProgress {
    inner: Mutex<ProgressSnapshot>,
    cancelled: AtomicBool,
}

impl RunProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ProgressSnapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 当前快照
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.lock().clone()
    }

    pub fn state(&self) -> RunState {
        self.lock().state.clone()
    }

    pub fn total(&self) -> usize {
        self.lock().total
    }

    pub fn completed(&self) -> usize {
        self.lock().completed
    }

    pub fn failed(&self) -> usize {
        self.lock().failed
    }

    /// 完成比例，范围 [0, 1]
    pub fn fraction(&self) -> f64 {
        self.lock().fraction()
    }

    /// 请求取消：之后开始的任务均被跳过
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Idle → Validating，返回是否成功转换
    pub(crate) fn begin_validation(&self) -> bool {
        let mut inner = self.lock();
        if inner.state != RunState::Idle {
            return false;
        }
        inner.state = RunState::Validating;
        true
    }

    /// Validating → Running，设置任务总数
    pub(crate) fn start(&self, total: usize) {
        let mut inner = self.lock();
        inner.state = RunState::Running;
        inner.total = total;
        inner.completed = 0;
    }

    /// 任意非终止状态 → Failed
    pub(crate) fn fail(&self, reason: impl Into<String>) {
        let mut inner = self.lock();
        if !inner.state.is_terminal() {
            inner.state = RunState::Failed(reason.into());
        }
    }

    /// 记录一个任务完成，返回 (已完成, 总数)
    pub(crate) fn complete_task(&self, result: &TaskResult) -> (usize, usize) {
        let mut inner = self.lock();
        if inner.completed < inner.total {
            inner.completed += 1;
            match result {
                TaskResult::Success { .. } => inner.success += 1,
                TaskResult::Skipped { .. } => inner.skipped += 1,
                TaskResult::Failed { .. } => inner.failed += 1,
            }
        }
        (inner.completed, inner.total)
    }

    /// Running → Completed
    pub(crate) fn finish(&self) {
        let mut inner = self.lock();
        if inner.state == RunState::Running {
            inner.state = RunState::Completed;
        }
    }
}

/// 进度事件
#[derive(Debug)]
pub enum ProgressEvent<'a> {
    /// 校验通过，任务即将提交
    RunStarted { total: usize, workers: usize },
    /// 一个任务结束（成功、失败或跳过）
    TaskFinished {
        result: &'a TaskResult,
        completed: usize,
        total: usize,
    },
    /// 全部任务结束
    RunCompleted {
        success: usize,
        failed: usize,
        skipped: usize,
    },
    /// 运行在校验或准备阶段失败
    RunFailed { reason: String },
}

/// 进度事件接收端
pub trait ProgressSink: Send + Sync {
    fn on_event(&self, event: ProgressEvent<'_>);
}

/// 忽略所有事件
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn on_event(&self, _event: ProgressEvent<'_>) {}
}
