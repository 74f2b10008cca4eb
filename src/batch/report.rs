//! # 运行报告导出
//!
//! 将每个任务的结果导出为 CSV。
//!
//! ## 格式
//! `index,input,status,output,error`，每个任务一行，按任务序号排列。
//!
//! ## 依赖关系
//! - 被 `commands/process.rs` 调用
//! - 使用 `batch/runner.rs` 的 RunSummary
//! - 使用 `csv` + `serde` 写入

use super::runner::RunSummary;
use crate::error::{FilterBatchError, Result};
use crate::models::TaskResult;

use serde::Serialize;
use std::path::Path;

/// CSV 行
#[derive(Debug, Serialize)]
struct ReportRow {
    index: usize,
    input: String,
    status: &'static str,
    output: String,
    error: String,
}

impl From<&TaskResult> for ReportRow {
    fn from(result: &TaskResult) -> Self {
        ReportRow {
            index: result.index(),
            input: result.input().display().to_string(),
            status: result.status(),
            output: result
                .output()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            error: result.message().unwrap_or_default(),
        }
    }
}

/// 导出运行结果为 CSV
pub fn write_csv(summary: &RunSummary, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for result in &summary.results {
        wtr.serialize(ReportRow::from(result))?;
    }

    wtr.flush().map_err(|e| FilterBatchError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
