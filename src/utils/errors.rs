// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::engines::traits::FetchError;

/// 抓取运行错误类型
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("Invalid title list: {0}")]
    Planning(String),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
