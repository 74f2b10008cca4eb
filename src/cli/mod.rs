//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `process`: 对目录中的图像批量施加滤镜
//! - `algorithms`: 列出支持的算法及其固定参数
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: process

pub mod process;

use clap::{ArgAction, Parser, Subcommand};

/// filterbatch - 图像批量滤镜工具
#[derive(Parser)]
#[command(name = "filterbatch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch-apply classical image filters to every image in a folder", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Apply the selected filters to every image in a folder
    Process(process::ProcessArgs),

    /// List the supported algorithms and their fixed parameters
    Algorithms,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Algorithm;
    use std::path::PathBuf;

    #[test]
    fn test_parse_process_command() {
        let cli = Cli::try_parse_from([
            "filterbatch",
            "-vv",
            "process",
            "--input",
            "photos",
            "--algorithms",
            "grayscale,edge-detection",
            "-a",
            "median-blur",
            "-j",
            "4",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.input, PathBuf::from("photos"));
                assert_eq!(args.output, PathBuf::from("Processed_Images"));
                assert_eq!(
                    args.algorithms,
                    vec![
                        Algorithm::Grayscale,
                        Algorithm::EdgeDetection,
                        Algorithm::MedianBlur
                    ]
                );
                assert_eq!(args.jobs, 4);
                assert!(!args.all);
                assert!(args.report.is_none());
            }
            _ => panic!("expected process command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_algorithm() {
        let parsed = Cli::try_parse_from([
            "filterbatch",
            "process",
            "--input",
            "photos",
            "--algorithms",
            "sharpen",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_parse_algorithms_command() {
        let cli = Cli::try_parse_from(["filterbatch", "algorithms"]).unwrap();
        assert!(matches!(cli.command, Commands::Algorithms));
    }
}
