//! # 测试辅助
//!
//! 在系统临时目录下创建独立的工作目录，测试结束时自动删除。

use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// 临时工作目录
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(label: &str) -> Self {
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "filterbatch-{}-{}-{}",
            label,
            std::process::id(),
            id
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        ScratchDir { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    pub fn mkdir(&self, name: &str) -> PathBuf {
        let dir = self.join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn touch(&self, name: &str) -> PathBuf {
        self.write_bytes(name, b"")
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let file = self.join(name);
        fs::write(&file, bytes).unwrap();
        file
    }

    /// 写入一幅带渐变的合成图像，格式由扩展名决定
    pub fn write_image(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let file = self.join(name);
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 40 % 256) as u8, (y * 60 % 256) as u8, ((x * y) % 256) as u8])
        });
        img.save(&file).unwrap();
        file
    }

    /// 统计目录下（递归）的文件数
    pub fn count_files(&self, name: &str) -> usize {
        walkdir::WalkDir::new(self.join(name))
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .count()
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
