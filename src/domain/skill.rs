use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{HexColor, SkillId, SkillName};

/// Skill tag attached to certificates.
///
/// Skills are shared across certificates and keyed by their exact name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub id: SkillId,
    pub name: SkillName,
    pub color: HexColor,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Skill`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewSkill {
    pub id: SkillId,
    pub name: SkillName,
    pub color: HexColor,
    pub created_at: NaiveDateTime,
}
