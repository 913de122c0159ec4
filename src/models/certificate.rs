use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::certificate::{
    Certificate as DomainCertificate, CertificateUpdate as DomainCertificateUpdate,
    NewCertificate as DomainNewCertificate,
};
use crate::domain::skill::Skill as DomainSkill;
use crate::domain::types::{
    CertificateDescription, CertificateId, CertificateLink, CertificateTitle, ImageUrl,
    IssuerName, TypeConstraintError, ViewCount,
};

/// Diesel model representing the `certificates` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::certificates)]
pub struct Certificate {
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
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Certificate`]. `view_count` is left to its default.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::certificates)]
pub struct NewCertificate<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub issuer: &'a str,
    pub description: Option<&'a str>,
    pub image_url: &'a str,
    pub link: Option<&'a str>,
    pub issued_date: NaiveDate,
    pub featured: bool,
    pub category_id: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset applied on updates.
///
/// Outer `None` skips the column; `Some(None)` writes NULL.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::certificates)]
pub struct CertificateChangeset<'a> {
    pub title: &'a str,
    pub issuer: &'a str,
    pub description: Option<Option<&'a str>>,
    pub image_url: &'a str,
    pub link: Option<Option<&'a str>>,
    pub issued_date: NaiveDate,
    pub featured: Option<bool>,
    pub category_id: &'a str,
    pub updated_at: NaiveDateTime,
}

/// Row of the `certificate_skills` join table.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::certificate_skills)]
pub struct CertificateSkill<'a> {
    pub certificate_id: &'a str,
    pub skill_id: &'a str,
}

impl Certificate {
    /// Combine the row with its already-converted associations.
    pub fn into_domain(
        self,
        category: DomainCategory,
        skills: Vec<DomainSkill>,
    ) -> Result<DomainCertificate, TypeConstraintError> {
        Ok(DomainCertificate {
            id: CertificateId::new(self.id)?,
            title: CertificateTitle::new(self.title)?,
            issuer: IssuerName::new(self.issuer)?,
            description: self
                .description
                .filter(|d| !d.trim().is_empty())
                .map(CertificateDescription::new)
                .transpose()?,
            image_url: ImageUrl::new(self.image_url)?,
            link: self
                .link
                .filter(|l| !l.trim().is_empty())
                .map(CertificateLink::new)
                .transpose()?,
            issued_date: self.issued_date,
            featured: self.featured,
            view_count: ViewCount::new(self.view_count)?,
            category,
            skills,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewCertificate> for NewCertificate<'a> {
    fn from(certificate: &'a DomainNewCertificate) -> Self {
        Self {
            id: certificate.id.as_str(),
            title: certificate.title.as_str(),
            issuer: certificate.issuer.as_str(),
            description: certificate.description.as_ref().map(|d| d.as_str()),
            image_url: certificate.image_url.as_str(),
            link: certificate.link.as_ref().map(|l| l.as_str()),
            issued_date: certificate.issued_date,
            featured: certificate.featured,
            category_id: certificate.category_id.as_str(),
            created_at: certificate.created_at,
            updated_at: certificate.updated_at,
        }
    }
}

impl<'a> From<&'a DomainCertificateUpdate> for CertificateChangeset<'a> {
    fn from(update: &'a DomainCertificateUpdate) -> Self {
        Self {
            title: update.title.as_str(),
            issuer: update.issuer.as_str(),
            description: update
                .description
                .as_ref()
                .map(|d| d.as_ref().map(|d| d.as_str())),
            image_url: update.image_url.as_str(),
            link: update
                .link
                .as_ref()
                .map(|l| l.as_ref().map(|l| l.as_str())),
            issued_date: update.issued_date,
            featured: update.featured,
            category_id: update.category_id.as_str(),
            updated_at: update.updated_at,
        }
    }
}
