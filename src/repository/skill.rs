use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::skill::{NewSkill, Skill};
use crate::models::skill::{NewSkill as DbNewSkill, Skill as DbSkill};
use crate::repository::{DieselRepository, RepositoryResult, SkillReader, SkillWriter};

/// Connect-or-create: insert skills missing by name, then load all requested.
///
/// Runs on the caller's connection so certificate writes can share the
/// surrounding transaction. The result follows the order of `requested`.
pub(crate) fn connect_or_create(
    conn: &mut SqliteConnection,
    requested: &[NewSkill],
) -> QueryResult<Vec<DbSkill>> {
    use crate::schema::skills;

    if requested.is_empty() {
        return Ok(Vec::new());
    }

    for skill in requested {
        diesel::insert_or_ignore_into(skills::table)
            .values(DbNewSkill::from(skill))
            .execute(conn)?;
    }

    let names = requested.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
    let mut stored = skills::table
        .filter(skills::name.eq_any(names))
        .load::<DbSkill>(conn)?;

    stored.sort_by_key(|row| {
        requested
            .iter()
            .position(|s| s.name.as_str() == row.name)
            .unwrap_or(usize::MAX)
    });
    Ok(stored)
}

impl SkillReader for DieselRepository {
    fn list_skills(&self) -> RepositoryResult<Vec<Skill>> {
        use crate::schema::skills;

        let mut conn = self.conn()?;

        let items = skills::table
            .order(skills::name.asc())
            .load::<DbSkill>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Skill>, _>>()?;

        Ok(items)
    }
}

impl SkillWriter for DieselRepository {
    fn connect_or_create_skills(&self, skills: &[NewSkill]) -> RepositoryResult<Vec<Skill>> {
        let mut conn = self.conn()?;

        let stored = conn.transaction(|conn| connect_or_create(conn, skills))?;

        let items = stored
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Skill>, _>>()?;
        Ok(items)
    }
}
