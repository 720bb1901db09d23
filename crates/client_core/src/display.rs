//! Display-ready projections of fetched records: card view models, date
//! formatting, and the degrade-to-placeholder lookups.

use chrono::NaiveDate;
use shared::domain::{Article, Service};

use crate::aggregator::ServiceCatalog;

pub const NO_ARTICLES_PLACEHOLDER: &str = "No Articles Found";
pub const NO_DATA_PLACEHOLDER: &str = "No data";

/// Long-form date used on article cards, e.g. "January 1, 2025".
pub fn format_published_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Everything an article card renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub title: String,
    pub slug: String,
    pub published: String,
}

impl From<&Article> for ArticleCard {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            slug: article.slug.clone(),
            published: format_published_date(article.created_at),
        }
    }
}

pub fn article_cards(articles: &[Article]) -> Vec<ArticleCard> {
    articles.iter().map(ArticleCard::from).collect()
}

/// Resolves a service's category reference against the fetched catalog.
/// An unresolved reference degrades to the "No data" placeholder instead of
/// failing the render.
pub fn category_label(service: &Service, catalog: &ServiceCatalog) -> String {
    service
        .category
        .and_then(|id| catalog.category(id))
        .map(|category| category.name.clone())
        .unwrap_or_else(|| NO_DATA_PLACEHOLDER.to_string())
}
