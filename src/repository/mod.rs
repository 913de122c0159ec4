use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, CategoryWithCount, NewCategory};
use crate::domain::certificate::{Certificate, CertificateUpdate, NewCertificate};
use crate::domain::skill::{NewSkill, Skill};
use crate::domain::types::{CategoryId, CertificateId};

pub mod category;
pub mod certificate;
pub mod errors;
pub mod skill;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for certificate entities.
pub trait CertificateReader {
    /// List every certificate with category and skills, newest-created first.
    fn list_certificates(&self) -> RepositoryResult<Vec<Certificate>>;
    /// Retrieve a certificate with its associations.
    fn get_certificate_by_id(&self, id: &CertificateId) -> RepositoryResult<Option<Certificate>>;
}

/// Write operations for certificate entities and their skill associations.
pub trait CertificateWriter {
    /// Persist a new certificate, connecting or creating its skills by name.
    fn create_certificate(&self, certificate: &NewCertificate) -> RepositoryResult<Certificate>;
    /// Replace every editable field and the whole skill set of a certificate.
    ///
    /// Returns [`RepositoryError::NotFound`] when the id does not resolve.
    fn update_certificate(
        &self,
        id: &CertificateId,
        update: &CertificateUpdate,
    ) -> RepositoryResult<Certificate>;
    /// Delete a certificate and its join rows. Skills are kept.
    fn delete_certificate(&self, id: &CertificateId) -> RepositoryResult<usize>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List categories ordered by name together with their certificate count.
    fn list_categories(&self) -> RepositoryResult<Vec<CategoryWithCount>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
}

/// Read-only operations for skill entities.
pub trait SkillReader {
    /// List all skills ordered by name.
    fn list_skills(&self) -> RepositoryResult<Vec<Skill>>;
}

/// Write operations for skill entities.
pub trait SkillWriter {
    /// Insert the skills whose names are not stored yet and return the stored
    /// record for every requested name. Existing skills keep their color.
    fn connect_or_create_skills(&self, skills: &[NewSkill]) -> RepositoryResult<Vec<Skill>>;
}
