//! # 统一错误处理模块
//!
//! 定义 filterbatch 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 前置条件错误：在任何任务调度之前报告，运行进入 `Failed`
//! - 单任务错误：在任务边界被捕获，转换为 `TaskResult::Failed`
//! - 致命错误：线程池或输出根目录无法创建，运行进入 `Failed`
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// filterbatch 统一错误类型
#[derive(Error, Debug)]
pub enum FilterBatchError {
    // ─────────────────────────────────────────────────────────────
    // 前置条件错误
    // ─────────────────────────────────────────────────────────────
    #[error("Input folder does not exist: {path}")]
    InputFolderNotFound { path: String },

    #[error("Please select at least one algorithm")]
    NoAlgorithmSelected,

    #[error("No valid images found in the input folder: {path}")]
    NoImagesFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 滤镜错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown algorithm: '{0}'")]
    InvalidAlgorithm(String),

    // ─────────────────────────────────────────────────────────────
    // 单任务 I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode image: {path} ({source})")]
    ImageDecode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image: {path} ({source})")]
    ImageEncode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to create directory: {path}")]
    DirectoryCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 致命错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to create output root: {path}")]
    OutputRootCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build worker pool: {0}")]
    WorkerPool(String),

    // ─────────────────────────────────────────────────────────────
    // 报告导出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl FilterBatchError {
    /// 是否为前置条件错误（运行从未进入 Running）
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            FilterBatchError::InputFolderNotFound { .. }
                | FilterBatchError::NoAlgorithmSelected
                | FilterBatchError::NoImagesFound { .. }
        )
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FilterBatchError>;
