// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::utils::errors::CrawlError;

/// 读取职位名称输入文件
///
/// 文件的全部内容是一个逗号分隔的职位名称列表，没有表头，
/// 不支持引号转义。空白项丢弃；一个名称都没有视为规划错误。
pub async fn read_titles(path: &Path) -> Result<Vec<String>, CrawlError> {
    let content = fs::read_to_string(path).await?;

    let titles: Vec<String> = content
        .split(',')
        .map(normalize_title)
        .filter(|title| !title.is_empty())
        .collect();

    if titles.is_empty() {
        return Err(CrawlError::Planning(format!(
            "input file {} contains no job titles",
            path.display()
        )));
    }

    debug!("Read {} titles from {}", titles.len(), path.display());
    Ok(titles)
}

/// 规范化单个职位名称
///
/// 去除首尾空白，内部空格替换为 `-`，斜杠替换为 `_`，
/// 使名称可以直接用于URL和目录名。
pub fn normalize_title(raw: &str) -> String {
    raw.trim().replace(' ', "-").replace('/', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_input(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_normalize_title_replaces_separators() {
        assert_eq!(normalize_title("data scientist"), "data-scientist");
        assert_eq!(normalize_title("ml/ai engineer"), "ml_ai-engineer");
        assert_eq!(normalize_title("  backend engineer\n"), "backend-engineer");
    }

    #[tokio::test]
    async fn test_read_titles_splits_on_commas() {
        let file = write_input("data scientist,backend engineer");

        let titles = read_titles(file.path()).await.unwrap();

        assert_eq!(titles, vec!["data-scientist", "backend-engineer"]);
    }

    #[tokio::test]
    async fn test_read_titles_drops_empty_entries() {
        let file = write_input("data scientist,,backend engineer,\n");

        let titles = read_titles(file.path()).await.unwrap();

        assert_eq!(titles, vec!["data-scientist", "backend-engineer"]);
    }

    #[tokio::test]
    async fn test_read_titles_empty_file_is_a_planning_error() {
        let file = write_input("  \n ");

        let result = read_titles(file.path()).await;

        assert!(matches!(result, Err(CrawlError::Planning(_))));
    }

    #[tokio::test]
    async fn test_read_titles_missing_file_is_io_error() {
        let result = read_titles(Path::new("/nonexistent/titles.csv")).await;

        assert!(matches!(result, Err(CrawlError::Io(_))));
    }
}
