//! # 色调滤镜
//!
//! 灰度化与亮度直方图均衡。
//!
//! ## 依赖关系
//! - 被 `filters/mod.rs` 调用
//! - 使用 `imageproc::stats` 统计累积直方图

use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::stats::cumulative_histogram;

/// 通道均值灰度化（截断取整）
pub fn grayscale_mean(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgb([r, g, b]) = *image.get_pixel(x, y);
        let sum = r as u16 + g as u16 + b as u16;
        Luma([(sum / 3) as u8])
    })
}

/// 在 YUV 空间均衡亮度通道后转回 RGB
pub fn equalize_luma(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut luma = GrayImage::new(width, height);
    let mut chroma = Vec::with_capacity((width * height) as usize);

    for (x, y, pixel) in image.enumerate_pixels() {
        let (y_val, u, v) = rgb_to_yuv(*pixel);
        luma.put_pixel(x, y, Luma([y_val]));
        chroma.push((u, v));
    }

    let lut = equalization_lut(&luma);

    RgbImage::from_fn(width, height, |x, y| {
        let (u, v) = chroma[(y * width + x) as usize];
        yuv_to_rgb(lut[luma.get_pixel(x, y)[0] as usize], u, v)
    })
}

/// 均衡查找表：`round((cdf[v] - cdf_min) * 255 / (total - cdf_min))`
///
/// `cdf_min` 为第一个非零累积计数；单一亮度的图像映射为恒等。
fn equalization_lut(luma: &GrayImage) -> [u8; 256] {
    let cdf = cumulative_histogram(luma).channels[0];
    let total = cdf[255];
    let cdf_min = cdf.iter().copied().find(|&c| c > 0).unwrap_or(0);

    let mut lut = [0u8; 256];
    if total == cdf_min {
        lut.iter_mut().enumerate().for_each(|(i, v)| *v = i as u8);
        return lut;
    }

    let scale = 255.0 / (total - cdf_min) as f64;
    for (v, &c) in lut.iter_mut().zip(cdf.iter()) {
        let mapped = c.saturating_sub(cdf_min) as f64 * scale;
        *v = mapped.round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// RGB -> YUV (BT.601)
///
/// Y 量化为 u8 以便统计直方图，U/V 保留浮点。
fn rgb_to_yuv(pixel: Rgb<u8>) -> (u8, f32, f32) {
    let [r, g, b] = pixel.0.map(f32::from);
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let u = 0.492 * (b - y) + 128.0;
    let v = 0.877 * (r - y) + 128.0;
    (y.round().clamp(0.0, 255.0) as u8, u, v)
}

/// YUV -> RGB (BT.601)
fn yuv_to_rgb(y: u8, u: f32, v: f32) -> Rgb<u8> {
    let y = y as f32;
    let u = u - 128.0;
    let v = v - 128.0;
    let r = y + 1.140 * v;
    let g = y - 0.395 * u - 0.581 * v;
    let b = y + 2.032 * u;
    Rgb([r, g, b].map(|c| c.round().clamp(0.0, 255.0) as u8))
}
