use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::{Category, CategoryWithCount};

/// Category as rendered in API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.into_inner(),
            name: value.name.into_inner(),
            color: value.color.into_inner(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCountDto {
    pub certificates: i32,
}

/// Category listing entry with the number of certificates it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWithCountDto {
    #[serde(flatten)]
    pub category: CategoryDto,
    #[serde(rename = "_count")]
    pub count: CategoryCountDto,
}

impl From<CategoryWithCount> for CategoryWithCountDto {
    fn from(value: CategoryWithCount) -> Self {
        Self {
            category: value.category.into(),
            count: CategoryCountDto {
                certificates: value.certificate_count.get(),
            },
        }
    }
}
