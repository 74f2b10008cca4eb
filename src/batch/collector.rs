//! # 文件收集器
//!
//! 列出输入目录中可识别扩展名的图像文件。
//!
//! ## 功能
//! - 仅扫描目录本层（不递归）
//! - 扩展名大小写不敏感匹配
//! - 指向文件的符号链接视为普通文件
//! - 按文件名排序，保证任务序号可复现
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `walkdir` 遍历目录

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 可识别的图像扩展名
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "tiff"];

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self { input }
    }

    /// 检查输入是否为目录
    pub fn is_directory(&self) -> bool {
        self.input.is_dir()
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Vec<PathBuf> {
        if !self.input.is_dir() {
            return vec![];
        }

        WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter(|entry| Self::matches_extension(entry.path()))
            .map(|e| e.path().to_path_buf())
            .collect()
    }

    /// 检查扩展名是否可识别
    fn matches_extension(path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => {
                let ext = ext.to_lowercase();
                IMAGE_EXTENSIONS.iter().any(|allowed| *allowed == ext)
            }
            None => false,
        }
    }
}
