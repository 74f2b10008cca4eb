//! # 批量执行器
//!
//! 校验配置，为每幅图像创建一个任务并提交到固定大小的线程池。
//!
//! ## 功能
//! - 前置条件校验（输入目录、算法选择、图像数量）
//! - 基于 rayon 线程池的并行执行
//! - 任务完成时更新共享进度并通知观察者
//! - 错误收集与汇总
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 调用
//! - 使用 `batch/collector.rs` 收集文件
//! - 使用 `batch/worker.rs` 执行单个任务
//! - 使用 `batch/progress.rs` 记录进度

use super::collector::FileCollector;
use super::progress::{ProgressEvent, ProgressSink, RunProgress};
use super::worker;
use crate::error::{FilterBatchError, Result};
use crate::filters::Algorithm;
use crate::models::{ImageTask, RunConfig, TaskResult};

use log::info;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 各任务结果（按任务序号排列）
    pub results: Vec<TaskResult>,
}

impl RunSummary {
    /// 合并处理结果
    pub fn merge(&mut self, result: TaskResult) {
        match &result {
            TaskResult::Success { .. } => self.success += 1,
            TaskResult::Skipped { .. } => self.skipped += 1,
            TaskResult::Failed { .. } => self.failed += 1,
        }
        self.results.push(result);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }

    /// 失败的任务
    pub fn failures(&self) -> impl Iterator<Item = &TaskResult> {
        self.results.iter().filter(|r| r.is_failed())
    }
}

/// 批量执行器（单次使用）
pub struct BatchRunner {
    config: RunConfig,
    progress: Arc<RunProgress>,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            progress: Arc::new(RunProgress::new()),
        }
    }

    /// 共享进度句柄，可在运行前取出供其他线程轮询或取消
    pub fn progress(&self) -> Arc<RunProgress> {
        Arc::clone(&self.progress)
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// 执行一次完整运行
    ///
    /// 前置条件或致命错误返回 `Err`，此时进度状态为 `Failed`；
    /// 单个任务的失败只记录在结果中，运行仍以 `Completed` 结束。
    pub fn run(self, sink: &dyn ProgressSink) -> Result<RunSummary> {
        if !self.progress.begin_validation() {
            return Err(FilterBatchError::Other(
                "Run progress has already been used".to_string(),
            ));
        }

        let files = self.prepare().map_err(|e| self.abort(e, sink))?;
        let workers = self.config.worker_count();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| self.abort(FilterBatchError::WorkerPool(e.to_string()), sink))?;

        let tasks = self.make_tasks(files);
        let total = tasks.len();
        info!(
            "processing {} image(s) with {} worker(s): {:?}",
            total, workers, self.config.algorithms
        );

        self.progress.start(total);
        sink.on_event(ProgressEvent::RunStarted { total, workers });

        let progress = &self.progress;
        let results: Vec<TaskResult> = pool.install(|| {
            tasks
                .par_iter()
                .map(|task| {
                    let result = if progress.is_cancelled() {
                        worker::skip_task(task, "run cancelled")
                    } else {
                        worker::run_task(task)
                    };

                    let (completed, total) = progress.complete_task(&result);
                    sink.on_event(ProgressEvent::TaskFinished {
                        result: &result,
                        completed,
                        total,
                    });
                    result
                })
                .collect()
        });

        // 汇总结果
        let mut summary = RunSummary::default();
        for result in results {
            summary.merge(result);
        }
        summary.results.sort_by_key(|r| r.index());

        self.progress.finish();
        sink.on_event(ProgressEvent::RunCompleted {
            success: summary.success,
            failed: summary.failed,
            skipped: summary.skipped,
        });

        Ok(summary)
    }

    /// 校验前置条件并创建输出根目录，返回待处理文件
    fn prepare(&self) -> Result<Vec<PathBuf>> {
        let input = &self.config.input_folder;

        let collector = FileCollector::new(input.clone());
        if !collector.is_directory() {
            return Err(FilterBatchError::InputFolderNotFound {
                path: input.display().to_string(),
            });
        }

        if self.config.algorithms.is_empty() {
            return Err(FilterBatchError::NoAlgorithmSelected);
        }

        let files = collector.collect();
        if files.is_empty() {
            return Err(FilterBatchError::NoImagesFound {
                path: input.display().to_string(),
            });
        }

        ensure_output_root(&self.config.output_root)?;

        Ok(files)
    }

    fn make_tasks(&self, files: Vec<PathBuf>) -> Vec<ImageTask> {
        let output_root = Arc::new(self.config.output_root.clone());
        let algorithms: Arc<[Algorithm]> = Arc::from(self.config.algorithms.as_slice());

        files
            .into_iter()
            .enumerate()
            .map(|(index, input)| {
                ImageTask::new(index, input, Arc::clone(&output_root), Arc::clone(&algorithms))
            })
            .collect()
    }

    /// 进入 Failed 状态并通知观察者
    fn abort(&self, error: FilterBatchError, sink: &dyn ProgressSink) -> FilterBatchError {
        let reason = error.to_string();
        self.progress.fail(reason.clone());
        sink.on_event(ProgressEvent::RunFailed { reason });
        error
    }
}

/// 创建输出根目录（已存在则复用）
fn ensure_output_root(root: &Path) -> Result<()> {
    fs::create_dir_all(root).map_err(|e| FilterBatchError::OutputRootCreate {
        path: root.display().to_string(),
        source: e,
    })
}
