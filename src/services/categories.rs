use crate::dto::categories::{CategoryDto, CategoryWithCountDto};
use crate::forms::categories::AddCategoryFormPayload;
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

/// List categories ordered by name with their certificate counts.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryWithCountDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories
            .into_iter()
            .map(CategoryWithCountDto::from)
            .collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Create a category. Duplicate names are rejected by the store.
pub fn add_category<R>(payload: AddCategoryFormPayload, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
{
    let category = payload.into_new_category();
    match repo.create_category(&category) {
        Ok(created) => {
            log::info!("Created category {}", created.id);
            Ok(created.into())
        }
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}
