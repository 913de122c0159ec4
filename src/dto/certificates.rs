use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::certificate::Certificate;
use crate::dto::categories::CategoryDto;
use crate::dto::skills::SkillDto;

/// Certificate with resolved category and skills as rendered in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDto {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub description: Option<String>,
    pub image_url: String,
    pub link: Option<String>,
    pub issued_date: NaiveDate,
    pub featured: bool,
    pub view_count: i32,
    pub category_id: String,
    pub category: CategoryDto,
    pub skills: Vec<SkillDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Certificate> for CertificateDto {
    fn from(value: Certificate) -> Self {
        Self {
            id: value.id.into_inner(),
            title: value.title.into_inner(),
            issuer: value.issuer.into_inner(),
            description: value.description.map(|d| d.into_inner()),
            image_url: value.image_url.into_inner(),
            link: value.link.map(|l| l.into_inner()),
            issued_date: value.issued_date,
            featured: value.featured,
            view_count: value.view_count.get(),
            category_id: value.category.id.as_str().to_string(),
            category: value.category.into(),
            skills: value.skills.into_iter().map(SkillDto::from).collect(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Body returned after a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}
