//! # 运行配置
//!
//! 一次批处理运行的不可变配置：输入目录、输出根目录、所选算法、并行度。
//!
//! ## 依赖关系
//! - 由 `commands/process.rs` 从命令行参数构造
//! - 被 `batch/runner.rs` 使用

use crate::error::{FilterBatchError, Result};
use crate::filters::Algorithm;

use std::path::PathBuf;

/// 默认输出根目录（相对于当前工作目录）
pub const DEFAULT_OUTPUT_ROOT: &str = "Processed_Images";

/// 批处理运行配置
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 输入目录
    pub input_folder: PathBuf,
    /// 输出根目录
    pub output_root: PathBuf,
    /// 所选算法（按选择顺序，已去重）
    pub algorithms: Vec<Algorithm>,
    /// 并行作业数（0 = 自动）
    pub jobs: usize,
}

impl RunConfig {
    pub fn new(
        input_folder: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        algorithms: impl IntoIterator<Item = Algorithm>,
    ) -> Self {
        let mut selected: Vec<Algorithm> = Vec::new();
        for alg in algorithms {
            if !selected.contains(&alg) {
                selected.push(alg);
            }
        }

        RunConfig {
            input_folder: input_folder.into(),
            output_root: output_root.into(),
            algorithms: selected,
            jobs: 0,
        }
    }

    /// 由算法名称构造，任一名称无法识别即返回 `InvalidAlgorithm`
    pub fn from_names<S: AsRef<str>>(
        input_folder: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        names: &[S],
    ) -> Result<Self> {
        let algorithms = names
            .iter()
            .map(|name| name.as_ref().parse::<Algorithm>())
            .collect::<std::result::Result<Vec<_>, FilterBatchError>>()?;
        Ok(Self::new(input_folder, output_root, algorithms))
    }

    /// 设置并行作业数
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// 实际工作线程数
    pub fn worker_count(&self) -> usize {
        if self.jobs == 0 {
            num_cpus::get().max(1)
        } else {
            self.jobs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapsed_in_order() {
        let config = RunConfig::new(
            "in",
            "out",
            [
                Algorithm::Blur,
                Algorithm::Grayscale,
                Algorithm::Blur,
                Algorithm::EdgeDetection,
            ],
        );
        assert_eq!(
            config.algorithms,
            vec![Algorithm::Blur, Algorithm::Grayscale, Algorithm::EdgeDetection]
        );
    }

    #[test]
    fn test_from_names() {
        let config = RunConfig::from_names("in", "out", &["Grayscale", "Edge Detection"]).unwrap();
        assert_eq!(
            config.algorithms,
            vec![Algorithm::Grayscale, Algorithm::EdgeDetection]
        );

        let err = RunConfig::from_names("in", "out", &["Grayscale", "Posterize"]).unwrap_err();
        assert!(matches!(err, FilterBatchError::InvalidAlgorithm(name) if name == "Posterize"));
    }

    #[test]
    fn test_worker_count() {
        let config = RunConfig::new("in", "out", [Algorithm::Blur]);
        assert!(config.worker_count() >= 1);
        assert_eq!(config.with_jobs(3).worker_count(), 3);
    }
}
