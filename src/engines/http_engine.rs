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

use crate::config::settings::CrawlerSettings;
use crate::engines::traits::{FetchError, Fetcher};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::debug;

/// HTTP抓取引擎
///
/// 基于reqwest实现的基本HTTP抓取引擎。整个运行期间共享同一个
/// Client连接池；超时上限覆盖从建立连接到读完正文的全过程。
pub struct HttpEngine {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpEngine {
    /// 创建新的HTTP抓取引擎
    ///
    /// # 参数
    ///
    /// * `user_agent` - 请求使用的User-Agent
    /// * `timeout` - 单次请求的超时上限
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent.to_string())
            .timeout(timeout)
            .build()?;

        Ok(Self { client, timeout })
    }

    /// 从配置创建HTTP抓取引擎
    pub fn from_settings(settings: &CrawlerSettings) -> Result<Self, FetchError> {
        Self::new(
            &settings.user_agent,
            Duration::from_secs(settings.fetch_timeout_secs),
        )
    }

    fn classify(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Request(error)
        }
    }
}

#[async_trait]
impl Fetcher for HttpEngine {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 响应正文文本
    /// * `Err(FetchError)` - 超时或传输层失败
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        let content = response.text().await.map_err(|e| self.classify(e))?;

        debug!("Fetched {} in {}ms", url, start.elapsed().as_millis());
        Ok(content)
    }
}

#[cfg(test)]
#[path = "http_engine_test.rs"]
mod tests;
