// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 单个职位的抓取结果状态
///
/// 状态在职位抓取结束时确定：
/// Skipped/Completed/Partial/Failed 四种终态，没有中间转换。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleOutcome {
    /// 全部列表页抓取完成
    Completed {
        /// 收集到的记录数
        postings: usize,
    },
    /// 输出目录已有内容，整个职位跳过
    Skipped,
    /// 部分列表页完成后失败，失败前收集的记录已落盘
    Partial {
        /// 失败前收集到的记录数
        postings: usize,
        /// 失败原因
        error: String,
    },
    /// 未收集到任何记录即失败
    Failed {
        /// 失败原因
        error: String,
    },
}

impl TitleOutcome {
    /// 该状态是否算作运行失败
    pub fn is_failure(&self) -> bool {
        matches!(self, TitleOutcome::Partial { .. } | TitleOutcome::Failed { .. })
    }

    /// 该状态下收集到的记录数
    pub fn postings(&self) -> usize {
        match self {
            TitleOutcome::Completed { postings } | TitleOutcome::Partial { postings, .. } => {
                *postings
            }
            TitleOutcome::Skipped | TitleOutcome::Failed { .. } => 0,
        }
    }
}

/// 将结果状态格式化为字符串表示
///
/// 用于日志记录和运行汇总显示
impl fmt::Display for TitleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TitleOutcome::Completed { postings } => {
                write!(f, "completed ({} postings)", postings)
            }
            TitleOutcome::Skipped => write!(f, "skipped (already populated)"),
            TitleOutcome::Partial { postings, error } => {
                write!(f, "partial ({} postings kept): {}", postings, error)
            }
            TitleOutcome::Failed { error } => write!(f, "failed: {}", error),
        }
    }
}

/// 一次运行的汇总
///
/// 按输入顺序记录每个职位的结果状态。
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 每个职位及其结果，按处理顺序
    pub titles: Vec<(String, TitleOutcome)>,
}

impl RunSummary {
    /// 记录一个职位的结果
    pub fn record(&mut self, title: impl Into<String>, outcome: TitleOutcome) {
        self.titles.push((title.into(), outcome));
    }

    /// 全部职位收集到的记录总数
    pub fn total_postings(&self) -> usize {
        self.titles.iter().map(|(_, o)| o.postings()).sum()
    }

    /// 是否有职位失败或只完成了一部分
    pub fn has_failures(&self) -> bool {
        self.titles.iter().any(|(_, o)| o.is_failure())
    }

    /// 各终态的数量：(completed, skipped, partial, failed)
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        let mut counts = (0, 0, 0, 0);
        for (_, outcome) in &self.titles {
            match outcome {
                TitleOutcome::Completed { .. } => counts.0 += 1,
                TitleOutcome::Skipped => counts.1 += 1,
                TitleOutcome::Partial { .. } => counts.2 += 1,
                TitleOutcome::Failed { .. } => counts.3 += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_and_failures() {
        let mut summary = RunSummary::default();
        summary.record("a", TitleOutcome::Completed { postings: 3 });
        summary.record("b", TitleOutcome::Skipped);
        summary.record(
            "c",
            TitleOutcome::Partial {
                postings: 1,
                error: "timeout".to_string(),
            },
        );

        assert_eq!(summary.counts(), (1, 1, 1, 0));
        assert_eq!(summary.total_postings(), 4);
        assert!(summary.has_failures());
    }

    #[test]
    fn test_clean_run_has_no_failures() {
        let mut summary = RunSummary::default();
        summary.record("a", TitleOutcome::Completed { postings: 0 });
        summary.record("b", TitleOutcome::Skipped);

        assert!(!summary.has_failures());
        assert_eq!(summary.total_postings(), 0);
    }
}
