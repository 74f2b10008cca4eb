//! # 任务与任务结果
//!
//! `ImageTask` 描述一幅源图像的处理单元，`TaskResult` 为其结果。
//!
//! ## 依赖关系
//! - 由 `batch/runner.rs` 创建
//! - 被 `batch/worker.rs` 消费
//! - 被 `batch/report.rs` 和 `commands/process.rs` 读取

use crate::error::FilterBatchError;
use crate::filters::Algorithm;

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 输出文件名前缀
pub const OUTPUT_PREFIX: &str = "processed_";

/// 单幅图像的处理任务（创建后不可变）
#[derive(Debug, Clone)]
pub struct ImageTask {
    index: usize,
    input: PathBuf,
    output_root: Arc<PathBuf>,
    algorithms: Arc<[Algorithm]>,
}

impl ImageTask {
    pub fn new(
        index: usize,
        input: PathBuf,
        output_root: Arc<PathBuf>,
        algorithms: Arc<[Algorithm]>,
    ) -> Self {
        ImageTask {
            index,
            input,
            output_root,
            algorithms,
        }
    }

    /// 任务序号（目录枚举顺序，从 0 开始）
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    /// 源文件名
    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    }

    /// 算法输出子目录 `<root>/<Algorithm>`
    pub fn algorithm_dir(&self, algorithm: Algorithm) -> PathBuf {
        self.output_root.join(algorithm.dir_name())
    }

    /// 输出路径 `<root>/<Algorithm>/processed_<name>`
    pub fn output_path(&self, algorithm: Algorithm) -> PathBuf {
        self.algorithm_dir(algorithm)
            .join(format!("{}{}", OUTPUT_PREFIX, self.file_name()))
    }
}

/// 单个任务的处理结果
#[derive(Debug)]
pub enum TaskResult {
    /// 全部算法处理成功，`output` 为最后一个算法写出的文件
    Success {
        index: usize,
        input: PathBuf,
        output: PathBuf,
    },
    /// 未执行（运行已取消）
    Skipped {
        index: usize,
        input: PathBuf,
        reason: String,
    },
    /// 处理失败，剩余算法已放弃
    Failed {
        index: usize,
        input: PathBuf,
        error: FilterBatchError,
    },
}

impl TaskResult {
    pub fn index(&self) -> usize {
        match self {
            TaskResult::Success { index, .. }
            | TaskResult::Skipped { index, .. }
            | TaskResult::Failed { index, .. } => *index,
        }
    }

    pub fn input(&self) -> &Path {
        match self {
            TaskResult::Success { input, .. }
            | TaskResult::Skipped { input, .. }
            | TaskResult::Failed { input, .. } => input,
        }
    }

    /// 状态名
    pub fn status(&self) -> &'static str {
        match self {
            TaskResult::Success { .. } => "success",
            TaskResult::Skipped { .. } => "skipped",
            TaskResult::Failed { .. } => "failed",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TaskResult::Success { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TaskResult::Failed { .. })
    }

    /// 成功时的输出路径
    pub fn output(&self) -> Option<&Path> {
        match self {
            TaskResult::Success { output, .. } => Some(output),
            _ => None,
        }
    }

    /// 失败或跳过的原因描述
    pub fn message(&self) -> Option<String> {
        match self {
            TaskResult::Success { .. } => None,
            TaskResult::Skipped { reason, .. } => Some(reason.clone()),
            TaskResult::Failed { error, .. } => Some(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(input: &str) -> ImageTask {
        ImageTask::new(
            4,
            PathBuf::from(input),
            Arc::new(PathBuf::from("Processed_Images")),
            Arc::from(vec![Algorithm::EdgeDetection, Algorithm::Blur]),
        )
    }

    #[test]
    fn test_output_layout() {
        let t = task("photos/cat.JPG");
        assert_eq!(t.file_name(), "cat.JPG");
        assert_eq!(
            t.output_path(Algorithm::EdgeDetection),
            Path::new("Processed_Images/EdgeDetection/processed_cat.JPG")
        );
        assert_eq!(
            t.algorithm_dir(Algorithm::Blur),
            Path::new("Processed_Images/Blur")
        );
        assert_eq!(t.index(), 4);
        assert_eq!(t.algorithms().len(), 2);
    }

    #[test]
    fn test_result_accessors() {
        let ok = TaskResult::Success {
            index: 0,
            input: PathBuf::from("a.png"),
            output: PathBuf::from("out/Blur/processed_a.png"),
        };
        assert!(ok.is_success());
        assert_eq!(ok.status(), "success");
        assert_eq!(ok.output(), Some(Path::new("out/Blur/processed_a.png")));
        assert_eq!(ok.message(), None);

        let failed = TaskResult::Failed {
            index: 1,
            input: PathBuf::from("b.png"),
            error: FilterBatchError::InvalidAlgorithm("Sepia".to_string()),
        };
        assert!(failed.is_failed());
        assert_eq!(failed.index(), 1);
        assert_eq!(failed.input(), Path::new("b.png"));
        assert_eq!(failed.message().unwrap(), "Unknown algorithm: 'Sepia'");
    }
}
