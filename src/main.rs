//! # filterbatch - 图像批量滤镜工具
//!
//! 对一个目录中的每幅图像施加所选的经典滤镜，结果按算法写入各自的子目录。
//!
//! ## 子命令
//! - `process`    - 批量处理（线程池并行，进度条显示）
//! - `algorithms` - 列出支持的算法
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (收集、校验、并行调度、进度)
//!   │     ├── filters/  (滤镜分发与实现)
//!   │     └── models/   (配置、任务、结果)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

use clap::Parser;
use filterbatch::cli::Cli;
use filterbatch::{commands, utils};
use log::LevelFilter;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

/// 初始化日志：默认 warn，`RUST_LOG` 优先，`-v` 逐级提高
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.init();
}
