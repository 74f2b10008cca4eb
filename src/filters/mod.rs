//! # 滤镜分发模块
//!
//! 根据算法名称对一幅图像施加对应的经典滤镜，返回尺寸不变的新图像。
//!
//! ## 支持的算法（集合封闭，参数固定）
//! - `Grayscale`: 通道均值灰度化
//! - `Blur`: 5×5 高斯平滑，sigma 由核尺寸推导
//! - `EdgeDetection`: Canny 边缘检测（低阈值 100，高阈值 200）
//! - `HistogramEqualization`: YUV 空间亮度直方图均衡（最暗已用灰阶映射为 0）
//! - `MedianFilter` / `MedianBlur`: 5×5 中值滤波（同一操作）
//! - `BilateralFilter`: 双边滤波（直径 9，颜色 sigma 75，空间 sigma 75）
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 子模块: tone, smoothing, edges
//! - 使用 `image` 表示像素数据，`imageproc` 提供部分滤镜实现

pub mod edges;
pub mod smoothing;
pub mod tone;

use crate::error::{FilterBatchError, Result};

use clap::ValueEnum;
use image::{DynamicImage, RgbImage};
use std::fmt;
use std::str::FromStr;

/// 高斯模糊核尺寸
pub const BLUR_KERNEL_SIZE: u32 = 5;
/// Canny 低阈值
pub const CANNY_LOW_THRESHOLD: f32 = 100.0;
/// Canny 高阈值
pub const CANNY_HIGH_THRESHOLD: f32 = 200.0;
/// 中值滤波窗口尺寸
pub const MEDIAN_KERNEL_SIZE: u32 = 5;
/// 双边滤波邻域直径
pub const BILATERAL_DIAMETER: u32 = 9;
/// 双边滤波颜色 sigma
pub const BILATERAL_SIGMA_COLOR: f32 = 75.0;
/// 双边滤波空间 sigma
pub const BILATERAL_SIGMA_SPACE: f32 = 75.0;

/// 支持的滤镜算法
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Channel-wise mean across color channels
    Grayscale,
    /// 5x5 Gaussian smoothing
    Blur,
    /// Canny edge map (thresholds 100/200)
    EdgeDetection,
    /// Equalize the luma histogram in YUV space
    HistogramEqualization,
    /// 5x5 median filter
    MedianFilter,
    /// Edge-preserving bilateral filter (d=9, sigma 75/75)
    BilateralFilter,
    /// 5x5 median blur (same operation as median-filter)
    MedianBlur,
}

impl Algorithm {
    /// 全部算法（规范顺序）
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Grayscale,
        Algorithm::Blur,
        Algorithm::EdgeDetection,
        Algorithm::HistogramEqualization,
        Algorithm::MedianFilter,
        Algorithm::BilateralFilter,
        Algorithm::MedianBlur,
    ];

    /// 输出子目录名
    pub fn dir_name(&self) -> &'static str {
        match self {
            Algorithm::Grayscale => "Grayscale",
            Algorithm::Blur => "Blur",
            Algorithm::EdgeDetection => "EdgeDetection",
            Algorithm::HistogramEqualization => "HistogramEqualization",
            Algorithm::MedianFilter => "MedianFilter",
            Algorithm::BilateralFilter => "BilateralFilter",
            Algorithm::MedianBlur => "MedianBlur",
        }
    }

    /// 可读名称
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Grayscale => "Grayscale",
            Algorithm::Blur => "Blur",
            Algorithm::EdgeDetection => "Edge Detection",
            Algorithm::HistogramEqualization => "Histogram Equalization",
            Algorithm::MedianFilter => "Median Filter",
            Algorithm::BilateralFilter => "Bilateral Filter",
            Algorithm::MedianBlur => "Median Blur",
        }
    }

    /// 固定参数说明
    pub fn parameters(&self) -> String {
        match self {
            Algorithm::Grayscale => "mean(R, G, B)".to_string(),
            Algorithm::Blur => format!(
                "kernel {0}x{0}, sigma {1:.2}",
                BLUR_KERNEL_SIZE,
                smoothing::auto_sigma(BLUR_KERNEL_SIZE)
            ),
            Algorithm::EdgeDetection => format!(
                "low {}, high {}",
                CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD
            ),
            Algorithm::HistogramEqualization => "YUV, equalize Y".to_string(),
            Algorithm::MedianFilter | Algorithm::MedianBlur => {
                format!("kernel {0}x{0}", MEDIAN_KERNEL_SIZE)
            }
            Algorithm::BilateralFilter => format!(
                "d {}, sigma color {}, sigma space {}",
                BILATERAL_DIAMETER, BILATERAL_SIGMA_COLOR, BILATERAL_SIGMA_SPACE
            ),
        }
    }

    /// 输出是否为单通道
    pub fn is_single_channel(&self) -> bool {
        matches!(self, Algorithm::Grayscale | Algorithm::EdgeDetection)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Algorithm {
    type Err = FilterBatchError;

    /// 接受 `EdgeDetection`、`Edge Detection`、`edge-detection`、`edge_detection` 等写法
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        Algorithm::ALL
            .iter()
            .copied()
            .find(|alg| alg.dir_name().to_lowercase() == key)
            .ok_or_else(|| FilterBatchError::InvalidAlgorithm(s.to_string()))
    }
}

/// 对图像施加指定算法
///
/// 纯函数：不修改输入，无副作用。单通道算法返回 `Luma8`，其余返回 `Rgb8`。
pub fn apply(image: &RgbImage, algorithm: Algorithm) -> DynamicImage {
    match algorithm {
        Algorithm::Grayscale => DynamicImage::ImageLuma8(tone::grayscale_mean(image)),
        Algorithm::Blur => DynamicImage::ImageRgb8(smoothing::gaussian_blur(
            image,
            BLUR_KERNEL_SIZE,
            0.0,
        )),
        Algorithm::EdgeDetection => DynamicImage::ImageLuma8(edges::canny_edges(
            image,
            CANNY_LOW_THRESHOLD,
            CANNY_HIGH_THRESHOLD,
        )),
        Algorithm::HistogramEqualization => {
            DynamicImage::ImageRgb8(tone::equalize_luma(image))
        }
        Algorithm::MedianFilter | Algorithm::MedianBlur => {
            DynamicImage::ImageRgb8(smoothing::median(image, MEDIAN_KERNEL_SIZE))
        }
        Algorithm::BilateralFilter => DynamicImage::ImageRgb8(smoothing::bilateral(
            image,
            BILATERAL_DIAMETER,
            BILATERAL_SIGMA_COLOR,
            BILATERAL_SIGMA_SPACE,
        )),
    }
}

/// 按名称施加算法，未知名称返回 `InvalidAlgorithm`
pub fn apply_named(image: &RgbImage, name: &str) -> Result<DynamicImage> {
    let algorithm: Algorithm = name.parse()?;
    Ok(apply(image, algorithm))
}
