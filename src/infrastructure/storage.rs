// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::domain::models::posting::PostingRecord;

/// 本地文件结果存储
///
/// 每个职位一个子目录存放描述文本文件，根目录下另有一个
/// 汇总文件记录所有抓取到的记录行。两类文件都以追加模式写入。
pub struct PostingStore {
    base_dir: PathBuf,
    aggregate_path: PathBuf,
}

impl PostingStore {
    /// 创建新的结果存储实例
    ///
    /// # 参数
    ///
    /// * `base_dir` - 输出根目录
    /// * `aggregate_file_name` - 根目录下汇总文件的文件名
    pub fn new(base_dir: impl Into<PathBuf>, aggregate_file_name: &str) -> Self {
        let base_dir = base_dir.into();
        let aggregate_path = base_dir.join(aggregate_file_name);
        Self {
            base_dir,
            aggregate_path,
        }
    }

    /// 确保职位子目录存在
    pub async fn prepare_title_dir(&self, title: &str) -> std::io::Result<()> {
        fs::create_dir_all(self.title_dir(title)).await
    }

    /// 判断职位是否已有输出
    ///
    /// 子目录非空即视为已完成，整个职位跳过。
    /// 调用前子目录必须已存在。
    pub async fn is_title_done(&self, title: &str) -> std::io::Result<bool> {
        let mut entries = fs::read_dir(self.title_dir(title)).await?;
        Ok(entries.next_entry().await?.is_some())
    }

    /// 写入一个职位的全部抓取记录
    ///
    /// 每条记录的描述文本写入单独的文件
    /// `{title}/{title}_{sequence_index}.txt`，同时向汇总文件
    /// 追加一批摘要行。空批次什么都不写。
    pub async fn flush_title(&self, records: &[PostingRecord]) -> std::io::Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        for record in records {
            let path = self.posting_path(record);
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .await?;
            file.write_all(record.text.as_bytes()).await?;
        }

        let mut lines = records
            .iter()
            .map(PostingRecord::summary_line)
            .collect::<Vec<_>>()
            .join("\n");
        lines.push('\n');

        let mut aggregate = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.aggregate_path)
            .await?;
        aggregate.write_all(lines.as_bytes()).await?;

        debug!(
            "Flushed {} records under {}",
            records.len(),
            self.base_dir.display()
        );
        Ok(())
    }

    fn title_dir(&self, title: &str) -> PathBuf {
        self.base_dir.join(title)
    }

    fn posting_path(&self, record: &PostingRecord) -> PathBuf {
        self.title_dir(&record.title)
            .join(format!("{}_{}.txt", record.title, record.sequence_index))
    }
}
