// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::CrawlerSettings;
use crate::domain::models::posting::PlannedUrl;

/// URL规划器
///
/// 为每个职位构建待抓取的列表页URL序列：先是首页，
/// 然后是分页范围内每个偏移对应的URL。纯构建，无副作用。
pub struct UrlPlanner {
    homepage: String,
    page_start: u32,
    page_end: u32,
    page_step: u32,
}

impl UrlPlanner {
    /// 创建新的URL规划器
    pub fn new(homepage: impl Into<String>, page_start: u32, page_end: u32, page_step: u32) -> Self {
        Self {
            homepage: homepage.into(),
            page_start,
            page_end,
            page_step: page_step.max(1),
        }
    }

    /// 从配置创建URL规划器
    pub fn from_settings(settings: &CrawlerSettings) -> Self {
        Self::new(
            settings.homepage.trim_end_matches('/'),
            settings.page_start,
            settings.page_end,
            settings.page_step,
        )
    }

    /// 规划单个职位的全部列表页URL
    ///
    /// 首页的结构与分页不同，使用独立的URL形式且没有
    /// `start` 参数；分页URL中职位名称的 `-` 换成 `+`。
    ///
    /// # 参数
    ///
    /// * `title` - 规范化后的职位名称
    ///
    /// # 返回值
    ///
    /// 按抓取顺序排列的计划URL，首页在前
    pub fn plan_title(&self, title: &str) -> Vec<PlannedUrl> {
        let mut planned = Vec::new();

        planned.push(PlannedUrl::new(
            title,
            format!("{}/q-{}-jobs.html", self.homepage, title),
        ));

        let query = title.replace('-', "+");
        let mut offset = self.page_start;
        while offset < self.page_end {
            planned.push(PlannedUrl::new(
                title,
                format!("{}/jobs?q={}&start={}", self.homepage, query, offset),
            ));
            offset += self.page_step;
        }

        planned
    }
}
