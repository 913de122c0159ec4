use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, CertificateCount, HexColor};

/// Category grouping certificates in the gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub color: HexColor,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub id: CategoryId,
    pub name: CategoryName,
    pub color: HexColor,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Category together with the number of certificates referencing it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryWithCount {
    pub category: Category,
    pub certificate_count: CertificateCount,
}
