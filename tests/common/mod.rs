//! Helpers for integration tests.

use chrono::Utc;
use pushkind_portfolio::db::{DbPool, establish_connection_pool, run_migrations};
use pushkind_portfolio::domain::category::NewCategory;
use pushkind_portfolio::domain::types::{CategoryId, CategoryName, HexColor};
use pushkind_portfolio::repository::{CategoryWriter, DieselRepository};
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

#[allow(dead_code)]
pub fn insert_category(repo: &DieselRepository, id: &str, name: &str) {
    let now = Utc::now().naive_utc();
    repo.create_category(&NewCategory {
        id: CategoryId::new(id).expect("valid category id"),
        name: CategoryName::new(name).expect("valid category name"),
        color: HexColor::default_category(),
        created_at: now,
        updated_at: now,
    })
    .expect("should create category");
}
