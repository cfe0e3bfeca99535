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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含抓取和存储两部分配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 抓取配置
    pub crawler: CrawlerSettings,
    /// 存储配置
    pub storage: StorageSettings,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerSettings {
    /// 目标站点首页URL
    pub homepage: String,
    /// 分页起始偏移
    pub page_start: u32,
    /// 分页结束偏移（不含）
    pub page_end: u32,
    /// 分页步长
    pub page_step: u32,
    /// 单次抓取的超时上限（秒）
    pub fetch_timeout_secs: u64,
    /// 同时在途的详情页抓取请求数
    pub concurrency: usize,
    /// 请求使用的User-Agent
    pub user_agent: String,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 输出根目录
    pub data_dir: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("crawler.homepage", "https://www.indeed.com")?
            // The site pages results 10 at a time
            .set_default("crawler.page_start", 10)?
            .set_default("crawler.page_end", 101)?
            .set_default("crawler.page_step", 10)?
            // Generous ceiling, the crawl favours completeness over speed
            .set_default("crawler.fetch_timeout_secs", 3600)?
            .set_default("crawler.concurrency", 8)?
            .set_default("crawler.user_agent", "Mozilla/5.0 (compatible; jobcrawl/1.0)")?
            // Default Storage settings
            .set_default("storage.data_dir", "data/job_postings")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("JOBCRAWL").separator("__"));

        builder.build()?.try_deserialize()
    }
}
