use std::collections::HashMap;

use diesel::dsl::count_star;
use diesel::prelude::*;

use crate::domain::category::{Category, CategoryWithCount, NewCategory};
use crate::domain::types::{CategoryId, CertificateCount};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository, RepositoryResult};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<CategoryWithCount>> {
        use crate::schema::{categories, certificates};

        let mut conn = self.conn()?;

        let counts = certificates::table
            .group_by(certificates::category_id)
            .select((certificates::category_id, count_star()))
            .load::<(String, i64)>(&mut conn)?
            .into_iter()
            .collect::<HashMap<String, i64>>();

        let items = categories::table
            .order(categories::name.asc())
            .load::<DbCategory>(&mut conn)?;

        items
            .into_iter()
            .map(|category| -> RepositoryResult<CategoryWithCount> {
                let count = counts.get(&category.id).copied().unwrap_or_default();
                let certificate_count =
                    CertificateCount::new(i32::try_from(count).unwrap_or(i32::MAX))?;
                Ok(CategoryWithCount {
                    category: category.try_into()?,
                    certificate_count,
                })
            })
            .collect()
    }

    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id.as_str())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let created = conn.transaction(|conn| {
            diesel::insert_into(categories::table)
                .values(db_category)
                .execute(conn)?;

            categories::table
                .find(category.id.as_str())
                .first::<DbCategory>(conn)
        })?;

        Ok(created.try_into()?)
    }
}
