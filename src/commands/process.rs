//! # process 命令实现
//!
//! 对输入目录中的每幅图像批量施加所选滤镜。
//!
//! ## 功能
//! - 命令行参数转换为不可变运行配置
//! - 进度条随任务完成推进
//! - 汇总统计与失败列表
//! - 可选 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/process.rs` 定义的参数
//! - 使用 `batch/` 模块执行批处理
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{report, BatchRunner, ProgressEvent, ProgressSink, RunSummary};
use crate::cli::process::ProcessArgs;
use crate::error::Result;
use crate::models::TaskResult;
use crate::utils::{output, progress};

use indicatif::ProgressBar;

/// 失败列表最多显示条数
const MAX_LISTED_FAILURES: usize = 10;

/// 将进度事件渲染到终端进度条
struct BarSink {
    pb: ProgressBar,
}

impl BarSink {
    fn new() -> Self {
        Self {
            pb: progress::create_progress_bar(0, "Processing"),
        }
    }
}

impl ProgressSink for BarSink {
    fn on_event(&self, event: ProgressEvent<'_>) {
        match event {
            ProgressEvent::RunStarted { total, .. } => {
                self.pb.set_length(total as u64);
                self.pb.set_position(0);
            }
            ProgressEvent::TaskFinished {
                result, completed, ..
            } => {
                if let TaskResult::Failed { input, error, .. } = result {
                    self.pb.suspend(|| {
                        output::print_error(&format!("{}: {}", input.display(), error));
                    });
                }
                self.pb.set_position(completed as u64);
            }
            ProgressEvent::RunCompleted { .. } => {
                self.pb.finish_with_message("Done");
            }
            ProgressEvent::RunFailed { .. } => {
                self.pb.finish_and_clear();
            }
        }
    }
}

/// 执行 process 命令
pub fn execute(args: ProcessArgs) -> Result<()> {
    output::print_header("Batch Image Filtering");

    let config = args.to_config();
    output::print_info(&format!("Input folder: '{}'", config.input_folder.display()));
    output::print_info(&format!("Output root: '{}'", config.output_root.display()));
    output::print_info(&format!(
        "Algorithms: {}",
        config
            .algorithms
            .iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join(", ")
    ));
    output::print_info(&format!("Workers: {}", config.worker_count()));

    let runner = BatchRunner::new(config);
    let output_root = runner.config().output_root.clone();
    let sink = BarSink::new();
    let summary = runner.run(&sink)?;

    print_summary(&summary);

    if let Some(path) = &args.report {
        report::write_csv(&summary, path)?;
        output::print_info(&format!("Report written to '{}'", path.display()));
    }

    output::print_done(&format!(
        "Processing complete, results in '{}'",
        output_root.display()
    ));

    Ok(())
}

/// 打印统计
fn print_summary(summary: &RunSummary) {
    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        summary.success, summary.skipped, summary.failed
    ));

    if summary.skipped > 0 {
        output::print_skip(&format!("{} image(s) not processed", summary.skipped));
    }

    if summary.failed > 0 {
        output::print_warning("Failed files:");
        for result in summary.failures().take(MAX_LISTED_FAILURES) {
            output::print_error(&format!(
                "  {}: {}",
                result.input().display(),
                result.message().unwrap_or_default()
            ));
        }
        if summary.failed > MAX_LISTED_FAILURES {
            output::print_warning(&format!(
                "  ... and {} more",
                summary.failed - MAX_LISTED_FAILURES
            ));
        }
    }
}
