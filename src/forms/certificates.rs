use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::certificate::{CertificateUpdate, NewCertificate};
use crate::domain::types::{
    CategoryId, CertificateDescription, CertificateId, CertificateLink, CertificateTitle,
    ImageUrl, IssuerName, SkillName, TypeConstraintError,
};

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, keeping the date part.
pub fn parse_issued_date(value: &str) -> Result<NaiveDate, TypeConstraintError> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| TypeConstraintError::InvalidDate("issued date"))
}

/// Trim, drop blanks and keep the first occurrence of each name.
fn normalize_skills(skills: Vec<String>) -> Result<Vec<SkillName>, TypeConstraintError> {
    let mut result: Vec<SkillName> = Vec::with_capacity(skills.len());
    for skill in skills {
        if skill.trim().is_empty() {
            continue;
        }
        let name = SkillName::new(skill)?;
        if !result.contains(&name) {
            result.push(name);
        }
    }
    Ok(result)
}

/// Absent stays `None`, blank becomes `Some(None)`.
fn optional_text<T>(
    value: Option<String>,
    build: impl FnOnce(String) -> Result<T, TypeConstraintError>,
) -> Result<Option<Option<T>>, TypeConstraintError> {
    match value {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(Some(None)),
        Some(text) => build(text).map(|v| Some(Some(v))),
    }
}

/// JSON body accepted by the create and update certificate endpoints.
///
/// The admin form submits empty strings for unset optional fields, so blank
/// `description` and `link` values clear the field. Omitted `featured`,
/// `description` and `link` default to empty on create and are left
/// unchanged on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CertificateForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 200))]
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(length(min = 1), url)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[validate(length(min = 1))]
    pub issued_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[validate(length(min = 1))]
    pub category_id: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub skills: Vec<String>,
}

/// Validated, strongly-typed form of [`CertificateForm`].
///
/// Optional fields keep the difference between omitted (`None`) and
/// explicitly blank (`Some(None)`).
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateFormPayload {
    pub title: CertificateTitle,
    pub issuer: IssuerName,
    pub description: Option<Option<CertificateDescription>>,
    pub image_url: ImageUrl,
    pub link: Option<Option<CertificateLink>>,
    pub issued_date: NaiveDate,
    pub featured: Option<bool>,
    pub category_id: CategoryId,
    pub skills: Vec<SkillName>,
}

impl CertificateFormPayload {
    pub fn into_new_certificate(self) -> NewCertificate {
        let now = Utc::now().naive_utc();
        NewCertificate {
            id: CertificateId::generate(),
            title: self.title,
            issuer: self.issuer,
            description: self.description.flatten(),
            image_url: self.image_url,
            link: self.link.flatten(),
            issued_date: self.issued_date,
            featured: self.featured.unwrap_or(false),
            category_id: self.category_id,
            skills: self.skills,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_certificate_update(self) -> CertificateUpdate {
        CertificateUpdate {
            title: self.title,
            issuer: self.issuer,
            description: self.description,
            image_url: self.image_url,
            link: self.link,
            issued_date: self.issued_date,
            featured: self.featured,
            category_id: self.category_id,
            skills: self.skills,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CertificateFormError {
    #[error("Certificate form validation failed: {0}")]
    Validation(String),
    #[error("Certificate form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CertificateFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CertificateFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CertificateForm> for CertificateFormPayload {
    type Error = CertificateFormError;

    fn try_from(value: CertificateForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            title: CertificateTitle::new(value.title)?,
            issuer: IssuerName::new(value.issuer)?,
            description: optional_text(value.description, CertificateDescription::new)?,
            image_url: ImageUrl::new(value.image_url)?,
            link: optional_text(value.link, CertificateLink::new)?,
            issued_date: parse_issued_date(&value.issued_date)?,
            featured: value.featured,
            category_id: CategoryId::new(value.category_id)?,
            skills: normalize_skills(value.skills)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> CertificateForm {
        CertificateForm {
            title: "A".into(),
            issuer: "B".into(),
            image_url: "http://x".into(),
            issued_date: "2024-01-01".into(),
            category_id: "web-dev".into(),
            skills: vec!["Go".into()],
            ..Default::default()
        }
    }

    #[test]
    fn featured_defaults_to_false_on_create() {
        let payload: CertificateFormPayload = sample_form().try_into().unwrap();
        assert_eq!(payload.featured, None);
        assert_eq!(payload.skills, vec![SkillName::new("Go").unwrap()]);

        let certificate = payload.into_new_certificate();
        assert!(!certificate.featured);
    }

    #[test]
    fn blank_optional_fields_clear_and_omitted_ones_are_kept() {
        let form = CertificateForm {
            description: Some("   ".into()),
            link: Some(String::new()),
            ..sample_form()
        };
        let payload: CertificateFormPayload = form.try_into().unwrap();
        assert_eq!(payload.description, Some(None));
        assert_eq!(payload.link, Some(None));

        let created = payload.clone().into_new_certificate();
        assert!(created.description.is_none());
        assert!(created.link.is_none());

        let omitted: CertificateFormPayload = sample_form().try_into().unwrap();
        let update = omitted.into_certificate_update();
        assert_eq!(update.description, None);
        assert_eq!(update.link, None);
        assert_eq!(update.featured, None);
    }

    #[test]
    fn title_and_issuer_are_trimmed() {
        let form = CertificateForm {
            title: "  Padded  ".into(),
            issuer: " Coursera ".into(),
            ..sample_form()
        };
        let payload: CertificateFormPayload = form.try_into().unwrap();
        assert_eq!(payload.title.as_str(), "Padded");
        assert_eq!(payload.issuer.as_str(), "Coursera");
    }

    #[test]
    fn skills_are_deduplicated_case_sensitively() {
        let form = CertificateForm {
            skills: vec![
                "Rust".into(),
                " Rust ".into(),
                "rust".into(),
                "".into(),
                "Go".into(),
            ],
            ..sample_form()
        };
        let payload: CertificateFormPayload = form.try_into().unwrap();
        let names = payload
            .skills
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Rust", "rust", "Go"]);
    }

    #[test]
    fn rejects_missing_required_fields() {
        let form = CertificateForm {
            title: "  ".into(),
            ..sample_form()
        };
        let payload: Result<CertificateFormPayload, _> = form.try_into();
        assert!(matches!(
            payload,
            Err(CertificateFormError::TypeConstraint(_))
        ));

        let form = CertificateForm {
            image_url: String::new(),
            ..sample_form()
        };
        let payload: Result<CertificateFormPayload, _> = form.try_into();
        assert!(matches!(payload, Err(CertificateFormError::Validation(_))));
    }

    #[test]
    fn rejects_invalid_dates() {
        let form = CertificateForm {
            issued_date: "2024-13-45".into(),
            ..sample_form()
        };
        let payload: Result<CertificateFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn parses_timestamps_as_dates() {
        assert_eq!(
            parse_issued_date("2024-01-15T00:00:00.000Z").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            parse_issued_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn deserializes_camel_case_body() {
        let body = r#"{"title":"A","issuer":"B","imageUrl":"http://x","issuedDate":"2024-01-01","categoryId":"web-dev","skills":["Go"]}"#;
        let form: CertificateForm = serde_json::from_str(body).unwrap();
        assert_eq!(form.image_url, "http://x");
        assert_eq!(form.category_id, "web-dev");
        assert_eq!(form.featured, None);
    }
}
