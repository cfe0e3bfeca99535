// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::domain::models::posting::{PlannedUrl, PostingRecord};
use crate::domain::services::extraction_service::{ListingExtractor, PostingExtractor};
use crate::engines::traits::{FetchError, Fetcher};

/// 抓取工作器
///
/// 按规划顺序逐个抓取一个职位的列表页，对每个列表页中的
/// 职位详情页做有上限的并发抓取，产出保持规划顺序的记录。
pub struct CrawlWorker {
    fetcher: Arc<dyn Fetcher>,
    listing_extractor: ListingExtractor,
    concurrency: usize,
}

impl CrawlWorker {
    /// 创建新的抓取工作器实例
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        listing_extractor: ListingExtractor,
        concurrency: usize,
    ) -> Self {
        Self {
            fetcher,
            listing_extractor,
            concurrency: concurrency.max(1),
        }
    }

    /// 抓取一个职位的全部列表页
    ///
    /// 列表页按规划顺序逐个处理；某个列表页抓取失败时停止该职位
    /// 的后续列表页，已收集的记录原样返回给调用方。
    ///
    /// # 返回值
    ///
    /// * `(records, None)` - 全部列表页完成
    /// * `(records, Some(error))` - 中途失败，records为失败前收集的记录
    pub async fn crawl_title(
        &self,
        planned: &[PlannedUrl],
    ) -> (Vec<PostingRecord>, Option<FetchError>) {
        let mut records = Vec::new();

        for listing in planned {
            match self.crawl_listing(listing).await {
                Ok(mut batch) => records.append(&mut batch),
                Err(e) => return (records, Some(e)),
            }
        }

        (records, None)
    }

    /// 抓取单个列表页并展开其中的职位详情页
    async fn crawl_listing(&self, planned: &PlannedUrl) -> Result<Vec<PostingRecord>, FetchError> {
        let start = Instant::now();

        let html = self.fetcher.fetch_text(&planned.url).await?;
        let links = self.listing_extractor.extract_job_links(&html);
        let base_index = planned.base_index();

        // 详情页并发抓取，结果按列表内位置重新排序，
        // 保证序号与文档顺序一致
        let mut fetched: Vec<(usize, String, Result<String, FetchError>)> =
            stream::iter(links.into_iter().enumerate())
                .map(|(position, link)| {
                    let fetcher = Arc::clone(&self.fetcher);
                    async move {
                        let result = fetcher.fetch_text(&link).await;
                        (position, link, result)
                    }
                })
                .buffer_unordered(self.concurrency)
                .collect()
                .await;
        fetched.sort_by_key(|(position, _, _)| *position);

        let mut records = Vec::new();
        for (position, link, result) in fetched {
            match result {
                Ok(job_html) => {
                    let text = PostingExtractor::extract_description(&job_html);
                    records.push(PostingRecord {
                        title: planned.title.clone(),
                        sequence_index: (base_index + position as u32).to_string(),
                        url: link,
                        text,
                    });
                }
                Err(e) => {
                    // 单个详情页失败只丢掉它自己，不影响列表页
                    warn!("Skipping job link {}: {}", link, e);
                }
            }
        }

        info!(
            "Crawled listing {} ({} postings) in {}ms",
            planned.url,
            records.len(),
            start.elapsed().as_millis()
        );
        Ok(records)
    }
}
