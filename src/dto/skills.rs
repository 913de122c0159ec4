use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::skill::Skill;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDto {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: NaiveDateTime,
}

impl From<Skill> for SkillDto {
    fn from(value: Skill) -> Self {
        Self {
            id: value.id.into_inner(),
            name: value.name.into_inner(),
            color: value.color.into_inner(),
            created_at: value.created_at,
        }
    }
}
