use crate::domain::types::CertificateId;
use crate::dto::certificates::CertificateDto;
use crate::forms::certificates::CertificateFormPayload;
use crate::repository::{CertificateReader, CertificateWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

/// List every certificate with category and skills, newest-created first.
pub fn list_certificates<R>(repo: &R) -> ServiceResult<Vec<CertificateDto>>
where
    R: CertificateReader,
{
    match repo.list_certificates() {
        Ok(certificates) => Ok(certificates.into_iter().map(CertificateDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list certificates: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Fetch a single certificate.
///
/// Unknown or blank identifiers yield [`ServiceError::NotFound`].
pub fn show_certificate<R>(certificate_id: &str, repo: &R) -> ServiceResult<CertificateDto>
where
    R: CertificateReader,
{
    let certificate_id = match CertificateId::new(certificate_id) {
        Ok(certificate_id) => certificate_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_certificate_by_id(&certificate_id) {
        Ok(Some(certificate)) => Ok(certificate.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get certificate: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Create a certificate, connecting or creating its skills by name.
///
/// The category reference is not checked up front: an unknown category is
/// rejected by the store and reported as an internal error.
pub fn create_certificate<R>(
    payload: CertificateFormPayload,
    repo: &R,
) -> ServiceResult<CertificateDto>
where
    R: CertificateWriter,
{
    let certificate = payload.into_new_certificate();
    match repo.create_certificate(&certificate) {
        Ok(created) => {
            log::info!("Created certificate {}", created.id);
            Ok(created.into())
        }
        Err(e) => {
            log::error!("Failed to create certificate: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Replace a certificate's fields and its complete skill set.
pub fn update_certificate<R>(
    certificate_id: &str,
    payload: CertificateFormPayload,
    repo: &R,
) -> ServiceResult<CertificateDto>
where
    R: CertificateWriter,
{
    let certificate_id = match CertificateId::new(certificate_id) {
        Ok(certificate_id) => certificate_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    let update = payload.into_certificate_update();
    match repo.update_certificate(&certificate_id, &update) {
        Ok(updated) => Ok(updated.into()),
        Err(RepositoryError::NotFound) => {
            log::error!("Failed to update certificate: {certificate_id} does not exist");
            Err(ServiceError::NotFound)
        }
        Err(e) => {
            log::error!("Failed to update certificate: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a certificate and its skill links. Skills themselves are kept.
pub fn delete_certificate<R>(certificate_id: &str, repo: &R) -> ServiceResult<()>
where
    R: CertificateWriter,
{
    let certificate_id = match CertificateId::new(certificate_id) {
        Ok(certificate_id) => certificate_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.delete_certificate(&certificate_id) {
        Ok(0) => {
            log::error!("Failed to delete certificate: {certificate_id} does not exist");
            Err(ServiceError::NotFound)
        }
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete certificate: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{CategoryId, CategoryName, HexColor};
    use crate::forms::certificates::CertificateForm;
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_category() -> Category {
        Category {
            id: CategoryId::new("web-dev").unwrap(),
            name: CategoryName::new("Web Development").unwrap(),
            color: HexColor::new("#3B82F6").unwrap(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn payload(skills: &[&str]) -> CertificateFormPayload {
        CertificateForm {
            title: "Advanced React Development".into(),
            issuer: "Coursera".into(),
            image_url: "https://example.com/react.png".into(),
            issued_date: "2024-01-15".into(),
            category_id: "web-dev".into(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
        .try_into()
        .unwrap()
    }

    #[test]
    fn create_then_show_returns_same_fields() {
        let repo = TestRepository::new(vec![sample_category()], vec![]);

        let created = create_certificate(payload(&["React", "JavaScript"]), &repo).unwrap();
        let fetched = show_certificate(&created.id, &repo).unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.title, "Advanced React Development");
        assert_eq!(fetched.category_id, "web-dev");
        assert!(!fetched.featured);
        assert_eq!(fetched.skills.len(), 2);
    }

    #[test]
    fn create_with_unknown_category_is_internal_error() {
        let repo = TestRepository::new(vec![], vec![]);

        let err = create_certificate(payload(&[]), &repo).unwrap_err();
        assert_eq!(err, ServiceError::Internal);
    }

    #[test]
    fn update_with_empty_skills_clears_associations() {
        let repo = TestRepository::new(vec![sample_category()], vec![]);
        let created = create_certificate(payload(&["React"]), &repo).unwrap();

        let updated = update_certificate(&created.id, payload(&[]), &repo).unwrap();
        assert!(updated.skills.is_empty());
        assert_eq!(repo.skill_count(), 1);
    }

    #[test]
    fn update_unknown_certificate_is_not_found() {
        let repo = TestRepository::new(vec![sample_category()], vec![]);

        let err = update_certificate("missing", payload(&[]), &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn delete_then_show_is_not_found() {
        let repo = TestRepository::new(vec![sample_category()], vec![]);
        let created = create_certificate(payload(&["React"]), &repo).unwrap();

        delete_certificate(&created.id, &repo).unwrap();

        assert_eq!(
            show_certificate(&created.id, &repo).unwrap_err(),
            ServiceError::NotFound
        );
        assert_eq!(
            delete_certificate(&created.id, &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn store_failures_collapse_to_internal() {
        let repo = TestRepository::failing();

        assert_eq!(
            list_certificates(&repo).unwrap_err(),
            ServiceError::Internal
        );
        assert_eq!(
            show_certificate("any", &repo).unwrap_err(),
            ServiceError::Internal
        );
    }
}
