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

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 超时
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// 请求失败
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// 抓取器特质
///
/// 对单个URL发起一次GET请求并返回响应正文文本。
/// 只处理传输层的成功与失败，不检查HTTP状态码；
/// 非2xx页面的正文和其他页面一样原样返回。
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// 抓取URL并返回正文文本
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 响应正文
    /// * `Err(FetchError)` - 超时或传输层失败
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}
