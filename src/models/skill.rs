use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::skill::{NewSkill as DomainNewSkill, Skill as DomainSkill};
use crate::domain::types::{HexColor, SkillId, SkillName, TypeConstraintError};

/// Diesel model representing the `skills` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::skills)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Skill`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::skills)]
pub struct NewSkill<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub color: &'a str,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Skill> for DomainSkill {
    type Error = TypeConstraintError;

    fn try_from(skill: Skill) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SkillId::new(skill.id)?,
            name: SkillName::new(skill.name)?,
            color: HexColor::new(skill.color)?,
            created_at: skill.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewSkill> for NewSkill<'a> {
    fn from(skill: &'a DomainNewSkill) -> Self {
        Self {
            id: skill.id.as_str(),
            name: skill.name.as_str(),
            color: skill.color.as_str(),
            created_at: skill.created_at,
        }
    }
}
