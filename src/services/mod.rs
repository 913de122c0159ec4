pub mod categories;
pub mod certificates;
pub mod errors;
pub mod skills;

pub use errors::{ServiceError, ServiceResult};
