//! # algorithms 命令实现
//!
//! 以表格列出支持的算法、输出子目录和固定参数。
//!
//! ## 依赖关系
//! - 使用 `filters/` 的 Algorithm
//! - 使用 `tabled` 输出表格

use crate::error::Result;
use crate::filters::Algorithm;
use crate::utils::output;

use clap::ValueEnum;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct AlgorithmRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "CLI value")]
    value: String,
    #[tabled(rename = "Output folder")]
    folder: &'static str,
    #[tabled(rename = "Parameters")]
    parameters: String,
}

fn rows() -> Vec<AlgorithmRow> {
    Algorithm::ALL
        .iter()
        .map(|alg| AlgorithmRow {
            name: alg.label(),
            value: alg
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap_or_default(),
            folder: alg.dir_name(),
            parameters: alg.parameters(),
        })
        .collect()
}

/// 执行 algorithms 命令
pub fn execute() -> Result<()> {
    output::print_header("Supported Algorithms");
    println!("{}", Table::new(rows()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_all_algorithms() {
        let rows = rows();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[2].name, "Edge Detection");
        assert_eq!(rows[2].value, "edge-detection");
        assert_eq!(rows[2].folder, "EdgeDetection");
        assert_eq!(rows[1].parameters, "kernel 5x5, sigma 1.10");
        assert_eq!(rows[4].parameters, rows[6].parameters);
    }

    #[test]
    fn test_table_renders_headers() {
        let table = Table::new(rows()).to_string();
        assert!(table.contains("Output folder"));
        assert!(table.contains("HistogramEqualization"));
    }
}
