//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here instead of next to the error definitions.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod service {
    use crate::forms::categories::AddCategoryFormError;
    use crate::forms::certificates::CertificateFormError;
    use crate::services::ServiceError;

    impl From<CertificateFormError> for ServiceError {
        fn from(val: CertificateFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<AddCategoryFormError> for ServiceError {
        fn from(val: AddCategoryFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }
}
