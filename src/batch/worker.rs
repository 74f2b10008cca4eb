//! # 单任务执行
//!
//! 解码一幅图像，按选择顺序依次施加每个算法并写出结果。
//!
//! ## 功能
//! - 解码后统一转换为 3 通道 RGB
//! - 逐算法创建输出子目录（幂等）并覆盖写出 `processed_<name>`
//! - 任一步骤出错即放弃剩余算法，错误转换为 `TaskResult::Failed`
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `filters/` 施加滤镜
//! - 使用 `image` 解码与编码

use crate::error::{FilterBatchError, Result};
use crate::filters;
use crate::models::{ImageTask, TaskResult};

use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

/// 执行任务，错误不会越过任务边界
pub fn run_task(task: &ImageTask) -> TaskResult {
    debug!(
        "task #{} start: {} ({} algorithm(s))",
        task.index(),
        task.input().display(),
        task.algorithms().len()
    );

    match process_image(task) {
        Ok(output) => {
            debug!("task #{} done: {}", task.index(), output.display());
            TaskResult::Success {
                index: task.index(),
                input: task.input().to_path_buf(),
                output,
            }
        }
        Err(error) => {
            warn!("task #{} failed: {}: {}", task.index(), task.input().display(), error);
            TaskResult::Failed {
                index: task.index(),
                input: task.input().to_path_buf(),
                error,
            }
        }
    }
}

/// 未开始即被取消的任务
pub fn skip_task(task: &ImageTask, reason: &str) -> TaskResult {
    debug!("task #{} skipped: {}", task.index(), reason);
    TaskResult::Skipped {
        index: task.index(),
        input: task.input().to_path_buf(),
        reason: reason.to_string(),
    }
}

/// 处理一幅图像，返回最后一个算法的输出路径
fn process_image(task: &ImageTask) -> Result<PathBuf> {
    let image = image::open(task.input())
        .map_err(|e| FilterBatchError::ImageDecode {
            path: task.input().display().to_string(),
            source: e,
        })?
        .to_rgb8();

    let mut last_output = None;

    for &algorithm in task.algorithms() {
        let processed = filters::apply(&image, algorithm);

        let dir = task.algorithm_dir(algorithm);
        fs::create_dir_all(&dir).map_err(|e| FilterBatchError::DirectoryCreate {
            path: dir.display().to_string(),
            source: e,
        })?;

        let output = task.output_path(algorithm);
        processed
            .save(&output)
            .map_err(|e| FilterBatchError::ImageEncode {
                path: output.display().to_string(),
                source: e,
            })?;

        last_output = Some(output);
    }

    last_output.ok_or(FilterBatchError::NoAlgorithmSelected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Algorithm;
    use crate::testutil::ScratchDir;
    use image::GenericImageView;
    use std::sync::Arc;

    fn task_for(scratch: &ScratchDir, input: PathBuf, algorithms: Vec<Algorithm>) -> ImageTask {
        ImageTask::new(
            0,
            input,
            Arc::new(scratch.join("out")),
            Arc::from(algorithms),
        )
    }

    #[test]
    fn test_writes_every_algorithm_and_returns_last() {
        let scratch = ScratchDir::new("worker-ok");
        let input = scratch.write_image("photo.png", 10, 6);
        let task = task_for(
            &scratch,
            input,
            vec![Algorithm::Grayscale, Algorithm::EdgeDetection, Algorithm::Blur],
        );

        let result = run_task(&task);
        let expected = scratch.join("out/Blur/processed_photo.png");
        assert_eq!(result.output(), Some(expected.as_path()));

        for alg in [Algorithm::Grayscale, Algorithm::EdgeDetection, Algorithm::Blur] {
            let written = image::open(task.output_path(alg)).unwrap();
            assert_eq!(written.dimensions(), (10, 6));
        }
    }

    #[test]
    fn test_jpeg_and_bmp_inputs() {
        let scratch = ScratchDir::new("worker-formats");
        for name in ["a.jpg", "b.bmp", "c.tiff"] {
            let input = scratch.write_image(name, 8, 8);
            let task = task_for(
                &scratch,
                input,
                vec![Algorithm::HistogramEqualization, Algorithm::Grayscale],
            );
            let result = run_task(&task);
            assert!(result.is_success(), "{}: {:?}", name, result.message());
        }
        assert_eq!(scratch.count_files("out"), 6);
    }

    #[test]
    fn test_corrupt_image_fails_without_output() {
        let scratch = ScratchDir::new("worker-corrupt");
        let input = scratch.write_bytes("broken.png", b"definitely not a png");
        let task = task_for(&scratch, input, vec![Algorithm::Blur]);

        match run_task(&task) {
            TaskResult::Failed { error, .. } => {
                assert!(matches!(error, FilterBatchError::ImageDecode { .. }))
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(!scratch.join("out/Blur").exists());
    }

    #[test]
    fn test_skip_task() {
        let scratch = ScratchDir::new("worker-skip");
        let task = task_for(&scratch, scratch.join("x.png"), vec![Algorithm::Blur]);
        let result = skip_task(&task, "cancelled");
        assert_eq!(result.status(), "skipped");
        assert_eq!(result.message().unwrap(), "cancelled");
    }
}
