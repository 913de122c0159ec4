use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::skill::Skill;
use crate::domain::types::{
    CategoryId, CertificateDescription, CertificateId, CertificateLink, CertificateTitle,
    ImageUrl, IssuerName, SkillName, ViewCount,
};

/// A certificate with its category and skills resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certificate {
    pub id: CertificateId,
    pub title: CertificateTitle,
    pub issuer: IssuerName,
    pub description: Option<CertificateDescription>,
    pub image_url: ImageUrl,
    pub link: Option<CertificateLink>,
    pub issued_date: NaiveDate,
    pub featured: bool,
    /// Read-side counter, never written through the API.
    pub view_count: ViewCount,
    pub category: Category,
    pub skills: Vec<Skill>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Certificate {
    /// Names of the attached skills in stored order.
    pub fn skill_names(&self) -> Vec<&str> {
        self.skills.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Data required to insert a new [`Certificate`].
///
/// `skills` is resolved with connect-or-create semantics: existing skills are
/// reused by exact name, missing ones are created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCertificate {
    pub id: CertificateId,
    pub title: CertificateTitle,
    pub issuer: IssuerName,
    pub description: Option<CertificateDescription>,
    pub image_url: ImageUrl,
    pub link: Option<CertificateLink>,
    pub issued_date: NaiveDate,
    pub featured: bool,
    pub category_id: CategoryId,
    pub skills: Vec<SkillName>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Update of a certificate's editable fields.
///
/// Required fields are always overwritten. `featured`, `description` and
/// `link` are left unchanged when `None`; `Some(None)` clears an optional
/// text field. The skill list replaces the previous association entirely;
/// skills that are not listed are detached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificateUpdate {
    pub title: CertificateTitle,
    pub issuer: IssuerName,
    pub description: Option<Option<CertificateDescription>>,
    pub image_url: ImageUrl,
    pub link: Option<Option<CertificateLink>>,
    pub issued_date: NaiveDate,
    pub featured: Option<bool>,
    pub category_id: CategoryId,
    pub skills: Vec<SkillName>,
    pub updated_at: NaiveDateTime,
}
