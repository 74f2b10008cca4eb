//! # 边缘检测
//!
//! 先转换为亮度图，再调用 `imageproc::edges::canny`。
//! `canny` 内部先做 sigma 1.4 的高斯平滑，同一阈值下边缘比未平滑的 Canny 稀疏。
//!
//! ## 依赖关系
//! - 被 `filters/mod.rs` 调用
//! - 使用 `imageproc::edges`

use image::{imageops, GrayImage, RgbImage};
use imageproc::edges::canny;

/// Canny 边缘图，像素值为 0 或 255
pub fn canny_edges(image: &RgbImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    let luma = imageops::grayscale(image);
    canny(&luma, low_threshold, high_threshold)
}
