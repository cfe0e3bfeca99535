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

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::info;
use url::Url;

use crate::config::settings::Settings;
use crate::domain::models::run_summary::{RunSummary, TitleOutcome};
use crate::domain::services::extraction_service::{ListingExtractor, PrefixLinkMatcher};
use crate::domain::services::planner::UrlPlanner;
use crate::engines::http_engine::HttpEngine;
use crate::engines::traits::Fetcher;
use crate::infrastructure::input;
use crate::infrastructure::storage::PostingStore;
use crate::utils::errors::CrawlError;
use crate::workers::crawl_worker::CrawlWorker;

/// 抓取运行用例
///
/// 串起输入读取、URL规划、抓取流水线和结果存储，
/// 产出整次运行的汇总。职位之间相互隔离：一个职位失败
/// 不影响其他职位，其结果在汇总中单独标记。
pub struct CrawlRunUseCase {
    settings: Settings,
}

impl CrawlRunUseCase {
    /// 创建新的抓取运行用例
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// 执行一次完整的抓取运行
    ///
    /// # 参数
    ///
    /// * `input_file` - 逗号分隔的职位名称输入文件路径
    /// * `output_file_name` - 输出根目录下汇总文件的文件名
    ///
    /// # 返回值
    ///
    /// * `Ok(RunSummary)` - 每个职位的结果汇总
    /// * `Err(CrawlError)` - 输入无效或存储读写失败
    pub async fn run(
        &self,
        input_file: &Path,
        output_file_name: &str,
    ) -> Result<RunSummary, CrawlError> {
        let start = Instant::now();

        // 1. Read and normalize the title list
        let titles = input::read_titles(input_file).await?;
        info!("Loaded {} job titles", titles.len());

        // 2. Build shared components, one client for the whole run
        let crawler = &self.settings.crawler;
        let homepage = Url::parse(&crawler.homepage).map_err(|e| {
            CrawlError::Planning(format!("invalid homepage {}: {}", crawler.homepage, e))
        })?;
        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpEngine::from_settings(crawler)?);
        let planner = UrlPlanner::from_settings(crawler);
        let extractor = ListingExtractor::new(homepage, Box::new(PrefixLinkMatcher::default()));
        let worker = CrawlWorker::new(fetcher, extractor, crawler.concurrency);
        let store = PostingStore::new(&self.settings.storage.data_dir, output_file_name);

        // 3. Crawl title by title, flushing as soon as each one settles
        let mut summary = RunSummary::default();
        for title in titles {
            let outcome = self.crawl_one(&worker, &planner, &store, &title).await?;
            info!("{}: {}", title, outcome);
            summary.record(title, outcome);
        }

        info!(
            "Run finished in {}ms, {} postings collected",
            start.elapsed().as_millis(),
            summary.total_postings()
        );
        Ok(summary)
    }

    /// 抓取单个职位并落盘
    async fn crawl_one(
        &self,
        worker: &CrawlWorker,
        planner: &UrlPlanner,
        store: &PostingStore,
        title: &str,
    ) -> Result<TitleOutcome, CrawlError> {
        store.prepare_title_dir(title).await?;
        if store.is_title_done(title).await? {
            return Ok(TitleOutcome::Skipped);
        }

        let planned = planner.plan_title(title);
        info!("Planned {} listing urls for {}", planned.len(), title);

        let (records, failure) = worker.crawl_title(&planned).await;
        let postings = records.len();
        store.flush_title(&records).await?;

        Ok(match failure {
            None => TitleOutcome::Completed { postings },
            Some(e) if postings > 0 => TitleOutcome::Partial {
                postings,
                error: e.to_string(),
            },
            Some(e) => TitleOutcome::Failed {
                error: e.to_string(),
            },
        })
    }
}
