use crate::domain::{
    article::{ArticleFilter, ArticleStatus, SortColumn, SortDirection, SortSpec},
    pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest},
    topic::TopicSelector,
};

/// Raw article listing parameters exactly as they arrived on the query
/// string. Nothing here is trusted; `into_filter` normalizes every field.
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub status: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub search: Option<String>,
    /// Comma separated ids and/or names.
    pub health_topic: Option<String>,
    /// A single topic name or slug.
    pub topic: Option<String>,
}

fn positive(raw: Option<&str>) -> Option<u32> {
    raw.map(str::trim)
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| *value > 0)
}

impl ListArticlesQuery {
    pub fn into_filter(self) -> ArticleFilter {
        let status = self
            .status
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .and_then(ArticleStatus::from_code)
            .unwrap_or_default();

        let limit = positive(self.limit.as_deref())
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);
        let page_number = positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let page = PageRequest::new(page_number, limit).unwrap_or_default();

        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(ToString::to_string);

        let sort = SortSpec {
            column: SortColumn::parse(self.sort_by.as_deref()),
            direction: SortDirection::parse(self.sort_order.as_deref()),
        };

        let mut topics: Vec<TopicSelector> = Vec::new();
        let single = self.topic.as_deref().and_then(TopicSelector::parse);
        let listed = self
            .health_topic
            .as_deref()
            .map(TopicSelector::parse_list)
            .unwrap_or_default();
        for selector in single.into_iter().chain(listed) {
            if !topics.contains(&selector) {
                topics.push(selector);
            }
        }

        ArticleFilter {
            status,
            search,
            topics,
            sort,
            page,
        }
    }
}
