//! # 平滑滤镜
//!
//! 高斯模糊、中值滤波、双边滤波。
//!
//! ## 功能
//! - 可分离高斯卷积（`imageproc::filter::separable_filter_equal`）
//! - 中值滤波（`imageproc::filter::median_filter`）
//! - 双边滤波：空间与颜色两个高斯权重，颜色距离为各通道差的绝对值之和
//!
//! ## 依赖关系
//! - 被 `filters/mod.rs` 调用
//! - 使用 `image`, `imageproc`

use image::{Rgb, RgbImage};
use imageproc::filter::{median_filter, separable_filter_equal};

const CHANNELS: usize = 3;

/// 由核尺寸推导 sigma：`0.3 * ((k - 1) * 0.5 - 1) + 0.8`
pub fn auto_sigma(kernel_size: u32) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// 生成归一化的一维高斯核
fn gaussian_kernel(kernel_size: u32, sigma: f32) -> Vec<f32> {
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        auto_sigma(kernel_size)
    };
    let half = (kernel_size / 2) as i32;

    let mut kernel: Vec<f32> = (-half..=half)
        .map(|i| (-((i * i) as f32) / (2.0 * sigma * sigma)).exp())
        .collect();

    let sum: f32 = kernel.iter().sum();
    kernel.iter_mut().for_each(|k| *k /= sum);
    kernel
}

/// 高斯模糊
///
/// `sigma <= 0` 时由核尺寸自动推导。核尺寸应为奇数，边界复制。
pub fn gaussian_blur(image: &RgbImage, kernel_size: u32, sigma: f32) -> RgbImage {
    let kernel = gaussian_kernel(kernel_size, sigma);
    separable_filter_equal(image, &kernel)
}

/// 中值滤波，`kernel_size` 为窗口边长（奇数）
pub fn median(image: &RgbImage, kernel_size: u32) -> RgbImage {
    let radius = kernel_size / 2;
    median_filter(image, radius, radius)
}

/// 双边滤波
///
/// 仅统计圆形邻域 `dx² + dy² <= r²` 内的像素，`r = diameter / 2`。
pub fn bilateral(image: &RgbImage, diameter: u32, sigma_color: f32, sigma_space: f32) -> RgbImage {
    let radius = (diameter / 2) as i64;
    let (width, height) = image.dimensions();
    let (w, h) = (width as i64, height as i64);

    let space_coeff = -0.5 / (sigma_space * sigma_space);
    let color_coeff = -0.5 / (sigma_color * sigma_color);

    // 预计算邻域偏移及空间权重
    let mut offsets = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let r2 = dx * dx + dy * dy;
            if r2 <= radius * radius {
                offsets.push((dx, dy, (r2 as f32 * space_coeff).exp()));
            }
        }
    }

    // 颜色距离取值范围 0..=255*3
    let color_weights: Vec<f32> = (0..=255 * CHANNELS)
        .map(|d| ((d * d) as f32 * color_coeff).exp())
        .collect();

    RgbImage::from_fn(width, height, |x, y| {
        let center = image.get_pixel(x, y);
        let mut sum = [0.0f32; CHANNELS];
        let mut weight_sum = 0.0f32;

        for &(dx, dy, space_weight) in &offsets {
            let nx = (x as i64 + dx).clamp(0, w - 1) as u32;
            let ny = (y as i64 + dy).clamp(0, h - 1) as u32;
            let neighbor = image.get_pixel(nx, ny);

            let distance: usize = (0..CHANNELS)
                .map(|c| (neighbor[c] as i32 - center[c] as i32).unsigned_abs() as usize)
                .sum();
            let weight = space_weight * color_weights[distance];

            for (c, acc) in sum.iter_mut().enumerate() {
                *acc += neighbor[c] as f32 * weight;
            }
            weight_sum += weight;
        }

        Rgb(sum.map(|s| (s / weight_sum).round().clamp(0.0, 255.0) as u8))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(color))
    }

    #[test]
    fn test_auto_sigma_for_5x5() {
        assert!((auto_sigma(5) - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_gaussian_kernel_normalized() {
        let kernel = gaussian_kernel(5, 0.0);
        assert_eq!(kernel.len(), 5);
        assert!((kernel.iter().sum::<f32>() - 1.0).abs() < 1e-5);
        assert!(kernel[2] > kernel[1] && kernel[1] > kernel[0]);
        assert!((kernel[0] - kernel[4]).abs() < 1e-7);
    }

    #[test]
    fn test_blur_keeps_flat_image() {
        let img = flat(9, 6, [40, 120, 200]);
        let out = gaussian_blur(&img, 5, 0.0);
        assert_eq!(out.dimensions(), img.dimensions());
        for (a, b) in out.pixels().zip(img.pixels()) {
            for c in 0..3 {
                assert!((a[c] as i32 - b[c] as i32).abs() <= 1, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_blur_spreads_single_dot() {
        let mut img = flat(7, 7, [0, 0, 0]);
        img.put_pixel(3, 3, Rgb([255, 255, 255]));
        let out = gaussian_blur(&img, 5, 0.0);

        assert!(out.get_pixel(3, 3)[0] < 255);
        assert!(out.get_pixel(2, 3)[0] > 0);
        assert!(out.get_pixel(4, 4)[1] > 0);
        // 5x5 核半径为 2，再远处不受影响
        assert_eq!(out.get_pixel(0, 3)[0], 0);
    }

    #[test]
    fn test_median_removes_salt_noise() {
        let mut img = flat(9, 9, [50, 50, 50]);
        img.put_pixel(4, 4, Rgb([255, 0, 255]));
        let out = median(&img, 5);
        assert_eq!(*out.get_pixel(4, 4), Rgb([50, 50, 50]));
    }

    #[test]
    fn test_bilateral_preserves_edge() {
        // 左黑右白的阶跃边缘
        let img = RgbImage::from_fn(12, 6, |x, _| {
            if x < 6 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let out = bilateral(&img, 9, 75.0, 75.0);

        assert!(out.get_pixel(5, 3)[0] < 10);
        assert!(out.get_pixel(6, 3)[0] > 245);
    }

    #[test]
    fn test_bilateral_smooths_small_noise() {
        let mut img = flat(9, 9, [100, 100, 100]);
        img.put_pixel(4, 4, Rgb([120, 120, 120]));
        let out = bilateral(&img, 9, 75.0, 75.0);
        let center = out.get_pixel(4, 4)[0];
        assert!(center < 110, "center {}", center);
    }
}
