use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

/// 职位链接判定器
///
/// 判断列表页锚点的href是否指向职位详情页。站点结构变化时
/// 只需替换判定器实现，不影响抓取流水线。
pub trait LinkMatcher: Send + Sync {
    /// href是否指向职位详情页
    fn is_job_link(&self, href: &str) -> bool;
}

/// 基于路径前缀的默认判定器
///
/// 职位详情链接形如 `/rc/clk?jk=...`，前缀之外还要求
/// 整个href长度超过最小值，排除只有裸前缀的无效链接。
pub struct PrefixLinkMatcher {
    prefix: &'static str,
    min_len: usize,
}

impl Default for PrefixLinkMatcher {
    fn default() -> Self {
        Self {
            prefix: "/rc/clk",
            min_len: 8,
        }
    }
}

impl LinkMatcher for PrefixLinkMatcher {
    fn is_job_link(&self, href: &str) -> bool {
        href.len() > self.min_len && href.starts_with(self.prefix)
    }
}

/// 列表页提取服务
///
/// 负责从列表页HTML中提取职位详情页的绝对URL
pub struct ListingExtractor {
    homepage: Url,
    matcher: Box<dyn LinkMatcher>,
}

impl ListingExtractor {
    /// 创建新的列表页提取服务
    pub fn new(homepage: Url, matcher: Box<dyn LinkMatcher>) -> Self {
        Self { homepage, matcher }
    }

    /// 提取职位详情页URL
    ///
    /// 只保留 `target="_blank"` 且href通过判定器的锚点，按文档顺序
    /// 返回绝对URL，不去重。没有匹配时返回空列表而不是错误。
    pub fn extract_job_links(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(r#"a[target="_blank"]"#).unwrap();

        let mut links = Vec::new();
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if !self.matcher.is_job_link(href) {
                    continue;
                }
                match self.homepage.join(href) {
                    Ok(absolute) => links.push(absolute.to_string()),
                    Err(e) => warn!("Skipping malformed href {}: {}", href, e),
                }
            }
        }
        links
    }
}

/// 详情页描述容器的class标记
const DESCRIPTION_CLASS: &str = "jobsearch-JobComponent-description";

/// 详情页提取服务
///
/// 负责从职位详情页HTML中提取描述文本
pub struct PostingExtractor;

impl PostingExtractor {
    /// 提取职位描述文本
    ///
    /// 取第一个描述容器中所有段落和列表项的文本，按文档顺序
    /// 用制表符连接。页面预期只有一个描述容器，多余的忽略；
    /// 没有容器时返回空字符串。
    pub fn extract_description(html: &str) -> String {
        let document = Html::parse_document(html);
        let block_selector = Selector::parse(&format!("div.{}", DESCRIPTION_CLASS)).unwrap();
        let text_selector = Selector::parse("p, li").unwrap();

        match document.select(&block_selector).next() {
            Some(block) => block
                .select(&text_selector)
                .map(|element| element.text().collect::<String>())
                .collect::<Vec<_>>()
                .join("\t"),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ListingExtractor {
        ListingExtractor::new(
            Url::parse("https://www.indeed.com").unwrap(),
            Box::new(PrefixLinkMatcher::default()),
        )
    }

    #[test]
    fn test_extract_job_links_filters_anchors() {
        let html = r#"
            <html><body>
                <a target="_blank" href="/rc/clk?jk=1">Job 1</a>
                <a target="_blank" href="/x">Not a job</a>
                <a href="/rc/clk?jk=2">No target</a>
            </body></html>
        "#;

        let links = extractor().extract_job_links(html);

        assert_eq!(links, vec!["https://www.indeed.com/rc/clk?jk=1"]);
    }

    #[test]
    fn test_extract_job_links_rejects_bare_prefix() {
        // href长度必须超过8，裸前缀 `/rc/clk` 和 `/rc/clk?` 都不算
        let html = r#"
            <html><body>
                <a target="_blank" href="/rc/clk">bare</a>
                <a target="_blank" href="/rc/clk?">too short</a>
                <a target="_blank" href="/rc/clk?j">long enough</a>
            </body></html>
        "#;

        let links = extractor().extract_job_links(html);

        assert_eq!(links, vec!["https://www.indeed.com/rc/clk?j"]);
    }

    #[test]
    fn test_extract_job_links_keeps_document_order_and_duplicates() {
        let html = r#"
            <html><body>
                <a target="_blank" href="/rc/clk?jk=b">B</a>
                <a target="_blank" href="/rc/clk?jk=a">A</a>
                <a target="_blank" href="/rc/clk?jk=b">B again</a>
            </body></html>
        "#;

        let links = extractor().extract_job_links(html);

        assert_eq!(
            links,
            vec![
                "https://www.indeed.com/rc/clk?jk=b",
                "https://www.indeed.com/rc/clk?jk=a",
                "https://www.indeed.com/rc/clk?jk=b",
            ]
        );
    }

    #[test]
    fn test_extract_job_links_empty_page() {
        assert!(extractor()
            .extract_job_links("<html><body></body></html>")
            .is_empty());
    }

    #[test]
    fn test_custom_matcher_replaces_default_predicate() {
        struct ViewJobMatcher;
        impl LinkMatcher for ViewJobMatcher {
            fn is_job_link(&self, href: &str) -> bool {
                href.starts_with("/viewjob")
            }
        }

        let html = r#"
            <html><body>
                <a target="_blank" href="/viewjob?jk=1">New style</a>
                <a target="_blank" href="/rc/clk?jk=2">Old style</a>
            </body></html>
        "#;

        let extractor = ListingExtractor::new(
            Url::parse("https://www.indeed.com").unwrap(),
            Box::new(ViewJobMatcher),
        );

        assert_eq!(
            extractor.extract_job_links(html),
            vec!["https://www.indeed.com/viewjob?jk=1"]
        );
    }

    #[test]
    fn test_extract_description_joins_paragraphs_and_list_items() {
        let html = r#"
            <html><body>
                <div class="jobsearch-JobComponent-description">
                    <p>First paragraph</p>
                    <ul><li>One bullet</li></ul>
                    <p>Second paragraph</p>
                </div>
            </body></html>
        "#;

        let text = PostingExtractor::extract_description(html);

        assert_eq!(text, "First paragraph\tOne bullet\tSecond paragraph");
    }

    #[test]
    fn test_extract_description_keeps_only_first_block() {
        let html = r#"
            <html><body>
                <div class="jobsearch-JobComponent-description"><p>canonical</p></div>
                <div class="jobsearch-JobComponent-description"><p>duplicate</p></div>
            </body></html>
        "#;

        assert_eq!(PostingExtractor::extract_description(html), "canonical");
    }

    #[test]
    fn test_extract_description_without_block_is_empty() {
        let html = "<html><body><p>unrelated</p></body></html>";

        assert_eq!(PostingExtractor::extract_description(html), "");
    }
}
