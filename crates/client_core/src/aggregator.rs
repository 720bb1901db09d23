//! Fan-out aggregation of the category/service catalog and the preferred
//! ordering applied to navigation sections.

use std::collections::HashMap;

use async_trait::async_trait;
use futures::future::join_all;
use shared::domain::{Category, CategoryId, Service};
use tracing::warn;

use crate::{error::FetchError, SiteClient};

/// Seam between the aggregator and whatever serves it collections. The real
/// backend implementation lives on [`SiteClient`].
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, FetchError>;
    async fn services_in(&self, category: CategoryId) -> Result<Vec<Service>, FetchError>;
}

#[async_trait]
impl CatalogSource for SiteClient {
    async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        self.list_categories().await
    }

    async fn services_in(&self, category: CategoryId) -> Result<Vec<Service>, FetchError> {
        self.list_category_services(category).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub services: Vec<Service>,
}

/// Joined snapshot of every category with its services, in backend order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceCatalog {
    pub groups: Vec<CategoryGroup>,
}

impl ServiceCatalog {
    /// True when the backend legitimately has zero categories. Callers render
    /// an explicit "no categories" state for this, not a blank screen.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.groups
            .iter()
            .map(|group| &group.category)
            .find(|category| category.id == id)
    }
}

/// Fetches the parent collection first, then fans out one services fetch per
/// category concurrently and joins the results back by category id.
///
/// A category whose child fetch fails or returns nothing is kept with an
/// empty service list; one bad sibling must not hide the others.
pub async fn fetch_service_catalog<S>(source: &S) -> Result<ServiceCatalog, FetchError>
where
    S: CatalogSource + ?Sized,
{
    let categories = source.categories().await?;
    if categories.is_empty() {
        return Ok(ServiceCatalog::default());
    }

    let fetches = categories.iter().map(|category| {
        let id = category.id;
        async move { (id, source.services_in(id).await) }
    });

    // Sibling fetches may resolve in any order; the merge is keyed, never
    // positional.
    let mut services_by_category: HashMap<CategoryId, Vec<Service>> = HashMap::new();
    for (id, outcome) in join_all(fetches).await {
        match outcome {
            Ok(services) => {
                services_by_category.insert(id, services);
            }
            Err(err) => {
                warn!(category_id = id.0, error = %err, "services fetch failed; keeping category with no services");
            }
        }
    }

    let groups = categories
        .into_iter()
        .map(|category| {
            let services = services_by_category.remove(&category.id).unwrap_or_default();
            CategoryGroup { category, services }
        })
        .collect();

    Ok(ServiceCatalog { groups })
}

/// A navigation entry: a category group plus the label it is displayed under.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSection {
    pub label: String,
    pub category: Category,
    pub services: Vec<Service>,
}

fn keyword_matches(name: &str, keyword: &str) -> bool {
    let name = name.to_lowercase();
    let keyword = keyword.to_lowercase();
    name.contains(&keyword) || keyword.contains(&name)
}

/// Reorders catalog groups into navigation sections following a preferred
/// keyword sequence.
///
/// Keywords match category names by case-insensitive substring containment in
/// either direction, so "Dev" matches "DEVELOPMENT" and "Security Services"
/// matches "SECURITY". Matched groups come first in keyword order and take
/// the keyword as display label; unmatched groups follow in backend order
/// under their own names. The result is truncated to `max_sections`.
pub fn order_nav_sections(
    groups: Vec<CategoryGroup>,
    keywords: &[String],
    max_sections: usize,
) -> Vec<NavSection> {
    let mut remaining: Vec<Option<CategoryGroup>> = groups.into_iter().map(Some).collect();
    let mut sections = Vec::with_capacity(remaining.len());

    for keyword in keywords {
        for slot in remaining.iter_mut() {
            let matched =
                matches!(slot, Some(group) if keyword_matches(&group.category.name, keyword));
            if !matched {
                continue;
            }
            if let Some(group) = slot.take() {
                sections.push(NavSection {
                    label: keyword.clone(),
                    category: group.category,
                    services: group.services,
                });
            }
        }
    }

    for group in remaining.into_iter().flatten() {
        sections.push(NavSection {
            label: group.category.name.clone(),
            category: group.category,
            services: group.services,
        });
    }

    sections.truncate(max_sections);
    sections
}
