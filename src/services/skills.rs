use crate::dto::skills::SkillDto;
use crate::repository::SkillReader;

use super::{ServiceError, ServiceResult};

/// List every known skill ordered by name.
pub fn list_skills<R>(repo: &R) -> ServiceResult<Vec<SkillDto>>
where
    R: SkillReader,
{
    match repo.list_skills() {
        Ok(skills) => Ok(skills.into_iter().map(SkillDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list skills: {e}");
            Err(ServiceError::Internal)
        }
    }
}
