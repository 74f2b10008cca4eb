//! # process 子命令 CLI 定义
//!
//! 对输入目录中的每幅图像施加所选滤镜
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/process.rs`

use crate::filters::Algorithm;
use crate::models::{RunConfig, DEFAULT_OUTPUT_ROOT};

use clap::Args;
use std::path::PathBuf;

/// process 子命令参数
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Input folder containing images (png, jpg, jpeg, bmp, tiff)
    #[arg(short, long, env = "FILTERBATCH_INPUT")]
    pub input: PathBuf,

    /// Output root; results go to <OUTPUT>/<Algorithm>/processed_<name>
    #[arg(short, long, default_value = DEFAULT_OUTPUT_ROOT)]
    pub output: PathBuf,

    /// Algorithms to apply, in order (comma-separated or repeated)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub algorithms: Vec<Algorithm>,

    /// Apply all seven algorithms
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Write a CSV report of per-image results
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl ProcessArgs {
    /// 转换为不可变运行配置
    pub fn to_config(&self) -> RunConfig {
        let algorithms = if self.all {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms.clone()
        };

        RunConfig::new(self.input.clone(), self.output.clone(), algorithms).with_jobs(self.jobs)
    }
}
