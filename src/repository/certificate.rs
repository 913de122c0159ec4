use std::collections::HashMap;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::certificate::{Certificate, CertificateUpdate, NewCertificate};
use crate::domain::skill::{NewSkill, Skill};
use crate::domain::types::{CertificateId, HexColor, SkillId, SkillName};
use crate::models::category::Category as DbCategory;
use crate::models::certificate::{
    Certificate as DbCertificate, CertificateChangeset, CertificateSkill,
    NewCertificate as DbNewCertificate,
};
use crate::models::skill::Skill as DbSkill;
use crate::repository::skill::connect_or_create;
use crate::repository::{
    CertificateReader, CertificateWriter, DieselRepository, RepositoryError, RepositoryResult,
};

/// Load certificates with category and skills resolved, newest-created first.
fn load_certificates(
    conn: &mut SqliteConnection,
    id: Option<&CertificateId>,
) -> RepositoryResult<Vec<Certificate>> {
    use crate::schema::{categories, certificate_skills, certificates, skills};

    let mut query = certificates::table
        .inner_join(categories::table)
        .select((DbCertificate::as_select(), DbCategory::as_select()))
        .order((certificates::created_at.desc(), certificates::id.asc()))
        .into_boxed::<diesel::sqlite::Sqlite>();

    if let Some(id) = id {
        query = query.filter(certificates::id.eq(id.as_str()));
    }

    let rows = query.load::<(DbCertificate, DbCategory)>(conn)?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids = rows
        .iter()
        .map(|(certificate, _)| certificate.id.clone())
        .collect::<Vec<String>>();

    let skill_rows = certificate_skills::table
        .inner_join(skills::table)
        .filter(certificate_skills::certificate_id.eq_any(ids))
        .select((certificate_skills::certificate_id, DbSkill::as_select()))
        .order(skills::name.asc())
        .load::<(String, DbSkill)>(conn)?;

    let mut skills_by_certificate: HashMap<String, Vec<Skill>> = HashMap::new();
    for (certificate_id, skill) in skill_rows {
        skills_by_certificate
            .entry(certificate_id)
            .or_default()
            .push(skill.try_into()?);
    }

    rows.into_iter()
        .map(|(certificate, category)| -> RepositoryResult<Certificate> {
            let skills = skills_by_certificate
                .remove(&certificate.id)
                .unwrap_or_default();
            Ok(certificate.into_domain(category.try_into()?, skills)?)
        })
        .collect()
}

fn load_certificate(
    conn: &mut SqliteConnection,
    id: &CertificateId,
) -> RepositoryResult<Certificate> {
    load_certificates(conn, Some(id))?
        .into_iter()
        .next()
        .ok_or(RepositoryError::NotFound)
}

/// Connect-or-create the named skills and link them to the certificate.
fn attach_skills(
    conn: &mut SqliteConnection,
    certificate_id: &CertificateId,
    names: &[SkillName],
    now: NaiveDateTime,
) -> RepositoryResult<usize> {
    use crate::schema::certificate_skills;

    let requested = names
        .iter()
        .map(|name| NewSkill {
            id: SkillId::generate(),
            name: name.clone(),
            color: HexColor::default_skill(),
            created_at: now,
        })
        .collect::<Vec<_>>();

    let stored = connect_or_create(conn, &requested)?;

    let links = stored
        .iter()
        .map(|skill| CertificateSkill {
            certificate_id: certificate_id.as_str(),
            skill_id: skill.id.as_str(),
        })
        .collect::<Vec<_>>();

    let mut affected = 0;
    for link in links {
        affected += diesel::insert_or_ignore_into(certificate_skills::table)
            .values(link)
            .execute(conn)?;
    }
    Ok(affected)
}

impl CertificateReader for DieselRepository {
    fn list_certificates(&self) -> RepositoryResult<Vec<Certificate>> {
        let mut conn = self.conn()?;
        load_certificates(&mut conn, None)
    }

    fn get_certificate_by_id(&self, id: &CertificateId) -> RepositoryResult<Option<Certificate>> {
        let mut conn = self.conn()?;
        let certificate = load_certificates(&mut conn, Some(id))?.into_iter().next();
        Ok(certificate)
    }
}

impl CertificateWriter for DieselRepository {
    fn create_certificate(&self, certificate: &NewCertificate) -> RepositoryResult<Certificate> {
        use crate::schema::certificates;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::insert_into(certificates::table)
                .values(DbNewCertificate::from(certificate))
                .execute(conn)?;

            attach_skills(
                conn,
                &certificate.id,
                &certificate.skills,
                certificate.created_at,
            )?;

            load_certificate(conn, &certificate.id)
        })
    }

    fn update_certificate(
        &self,
        id: &CertificateId,
        update: &CertificateUpdate,
    ) -> RepositoryResult<Certificate> {
        use crate::schema::{certificate_skills, certificates};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let affected = diesel::update(certificates::table.find(id.as_str()))
                .set(CertificateChangeset::from(update))
                .execute(conn)?;

            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }

            // Full replace: previous links are dropped before reattaching.
            let links = certificate_skills::table
                .filter(certificate_skills::certificate_id.eq(id.as_str()));
            diesel::delete(links).execute(conn)?;

            attach_skills(conn, id, &update.skills, update.updated_at)?;

            load_certificate(conn, id)
        })
    }

    fn delete_certificate(&self, id: &CertificateId) -> RepositoryResult<usize> {
        use crate::schema::{certificate_skills, certificates};

        let mut conn = self.conn()?;

        let affected = conn.transaction(|conn| {
            let links = certificate_skills::table
                .filter(certificate_skills::certificate_id.eq(id.as_str()));
            diesel::delete(links).execute(conn)?;

            diesel::delete(certificates::table.find(id.as_str())).execute(conn)
        })?;

        Ok(affected)
    }
}
