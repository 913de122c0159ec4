//! Read-side views over a fetched certificate collection.
//!
//! These functions back the public gallery: they never touch the store and
//! operate on whatever list the API returned.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryWithCount;
use crate::domain::certificate::Certificate;
use crate::domain::types::{CategoryId, TypeConstraintError};

/// Ordering applied to the gallery grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Most recently issued first.
    #[default]
    Latest,
    /// Earliest issued first.
    Oldest,
    /// Most viewed first.
    Views,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Latest => "latest",
            SortMode::Oldest => "oldest",
            SortMode::Views => "views",
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(SortMode::Latest),
            "oldest" => Ok(SortMode::Oldest),
            "views" => Ok(SortMode::Views),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown sort mode `{other}`"
            ))),
        }
    }
}

/// Filter and ordering selected by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryQuery {
    /// Free-text search over title and issuer. Empty matches everything.
    pub search: String,
    /// Restrict to one category, or `None` for all.
    pub category_id: Option<CategoryId>,
    pub sort: SortMode,
}

/// Case-insensitive substring match against the title or the issuer.
pub fn matches_search(certificate: &Certificate, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    certificate.title.to_lowercase().contains(&needle)
        || certificate.issuer.to_lowercase().contains(&needle)
}

fn matches_category(certificate: &Certificate, category_id: Option<&CategoryId>) -> bool {
    category_id.is_none_or(|id| &certificate.category.id == id)
}

/// Filter by search text and category, then sort.
///
/// Sorting is stable, so certificates that compare equal keep the order in
/// which they were passed in.
pub fn browse<'a>(certificates: &'a [Certificate], query: &GalleryQuery) -> Vec<&'a Certificate> {
    let mut result = certificates
        .iter()
        .filter(|c| matches_search(c, &query.search))
        .filter(|c| matches_category(c, query.category_id.as_ref()))
        .collect::<Vec<_>>();

    match query.sort {
        SortMode::Latest => result.sort_by(|a, b| b.issued_date.cmp(&a.issued_date)),
        SortMode::Oldest => result.sort_by(|a, b| a.issued_date.cmp(&b.issued_date)),
        SortMode::Views => result.sort_by(|a, b| b.view_count.cmp(&a.view_count)),
    }

    result
}

/// Certificates flagged as featured, in input order.
pub fn featured(certificates: &[Certificate]) -> Vec<&Certificate> {
    certificates.iter().filter(|c| c.featured).collect()
}

/// Headline numbers shown above the gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub certificates: usize,
    pub categories: usize,
    pub featured: usize,
    pub skills: usize,
}

impl PortfolioStats {
    pub fn collect(certificates: &[Certificate], categories: &[CategoryWithCount]) -> Self {
        let mut skills = certificates
            .iter()
            .flat_map(|c| c.skills.iter().map(|s| s.name.as_str()))
            .collect::<Vec<_>>();
        skills.sort_unstable();
        skills.dedup();

        Self {
            certificates: certificates.len(),
            categories: categories.len(),
            featured: certificates.iter().filter(|c| c.featured).count(),
            skills: skills.len(),
        }
    }
}
