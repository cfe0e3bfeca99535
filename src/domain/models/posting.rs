// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 计划抓取的列表页URL
///
/// 由URL规划器构建，关联其所属职位名称。构建后不可变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedUrl {
    /// 所属职位名称（规范化后）
    pub title: String,
    /// 完整请求URL
    pub url: String,
}

impl PlannedUrl {
    /// 创建新的计划URL
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// 计算该列表页的起始序号
    ///
    /// 分页URL以 `start={offset}` 结尾，起始序号为offset；
    /// 首页URL没有分页参数，起始序号为0。
    ///
    /// 判定沿用URL末尾token的规则：按 `=` 切分取最后一段，
    /// 超过4个字符的token不是页码。URL格式是对外契约，
    /// 序号推导以它为准。
    pub fn base_index(&self) -> u32 {
        let token = self.url.rsplit('=').next().unwrap_or("");
        if token.len() > 4 {
            return 0;
        }
        token.parse().unwrap_or(0)
    }
}

/// 职位描述抓取记录
///
/// 流水线的终端产物，写入结果存储后不再使用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingRecord {
    /// 所属职位名称
    pub title: String,
    /// 该职位下的序号（分页偏移+列表内位置，十进制字符串）
    pub sequence_index: String,
    /// 职位详情页URL
    pub url: String,
    /// 提取出的描述文本（制表符连接的段落和列表项）
    pub text: String,
}

impl PostingRecord {
    /// 汇总文件中对应的一行：`title\tindex\turl`
    pub fn summary_line(&self) -> String {
        format!("{}\t{}\t{}", self.title, self.sequence_index, self.url)
    }
}
