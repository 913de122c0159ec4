//! Sample portfolio content loaded by the `seed` binary.
//!
//! Seeding is idempotent: categories are matched by id, skills by name and
//! certificates by title and issuer, so re-running only fills gaps.

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use crate::domain::category::NewCategory;
use crate::domain::certificate::NewCertificate;
use crate::domain::skill::NewSkill;
use crate::domain::types::{
    CategoryId, CategoryName, CertificateDescription, CertificateId, CertificateLink,
    CertificateTitle, HexColor, ImageUrl, IssuerName, SkillId, SkillName, TypeConstraintError,
};
use crate::repository::{
    CategoryReader, CategoryWriter, CertificateReader, CertificateWriter, RepositoryError,
    SkillWriter,
};

pub const SEED_CATEGORIES: [(&str, &str, &str); 5] = [
    ("web-dev", "Web Development", "#3B82F6"),
    ("design", "Design", "#EC4899"),
    ("frontend", "Frontend Frameworks", "#10B981"),
    ("cloud", "Cloud & DevOps", "#F59E0B"),
    ("leadership", "Leadership", "#8B5CF6"),
];

pub const SEED_SKILLS: [&str; 19] = [
    "React",
    "JavaScript",
    "TypeScript",
    "Frontend",
    "UI/UX",
    "Design",
    "Figma",
    "Node.js",
    "MongoDB",
    "Next.js",
    "AWS",
    "Cloud",
    "DevOps",
    "HTML",
    "CSS",
    "Responsive",
    "Leadership",
    "Management",
    "Full Stack",
];

struct SeedCertificate {
    title: &'static str,
    issuer: &'static str,
    description: &'static str,
    image_url: &'static str,
    link: Option<&'static str>,
    issued_date: (i32, u32, u32),
    featured: bool,
    category_id: &'static str,
    skills: [&'static str; 3],
}

const SEED_CERTIFICATES: [SeedCertificate; 5] = [
    SeedCertificate {
        title: "Advanced React Development",
        issuer: "Coursera",
        description: "Comprehensive course covering React Hooks, Context API, Performance Optimization.",
        image_url: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=600&fit=crop",
        link: Some("https://coursera.org/verify/example"),
        issued_date: (2024, 1, 15),
        featured: true,
        category_id: "web-dev",
        skills: ["React", "JavaScript", "Frontend"],
    },
    SeedCertificate {
        title: "UI/UX Design Fundamentals",
        issuer: "Google",
        description: "Learn the foundations of user experience and interface design.",
        image_url: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=800&h=600&fit=crop",
        link: Some("https://google.com/verify/example"),
        issued_date: (2024, 2, 20),
        featured: true,
        category_id: "design",
        skills: ["UI/UX", "Design", "Figma"],
    },
    SeedCertificate {
        title: "Full Stack Web Development",
        issuer: "Meta",
        description: "Complete bootcamp covering frontend and backend development.",
        image_url: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&h=600&fit=crop",
        link: Some("https://meta.com/verify/example"),
        issued_date: (2023, 11, 10),
        featured: true,
        category_id: "web-dev",
        skills: ["Full Stack", "Node.js", "MongoDB"],
    },
    SeedCertificate {
        title: "Next.js 14 Masterclass",
        issuer: "Vercel",
        description: "Master Next.js 14 App Router, Server Components, and optimization.",
        image_url: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=800&h=600&fit=crop",
        link: None,
        issued_date: (2024, 3, 5),
        featured: false,
        category_id: "frontend",
        skills: ["Next.js", "React", "TypeScript"],
    },
    SeedCertificate {
        title: "AWS Cloud Practitioner",
        issuer: "Amazon Web Services",
        description: "Foundational certification covering AWS cloud concepts.",
        image_url: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=800&h=600&fit=crop",
        link: Some("https://aws.amazon.com/verify/example"),
        issued_date: (2023, 9, 28),
        featured: false,
        category_id: "cloud",
        skills: ["AWS", "Cloud", "DevOps"],
    },
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),
}

/// Number of records inserted by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub skills: usize,
    pub certificates: usize,
}

fn seed_certificate(data: &SeedCertificate) -> Result<NewCertificate, SeedError> {
    let (year, month, day) = data.issued_date;
    let issued_date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(TypeConstraintError::InvalidDate("issued date"))?;
    let now = Utc::now().naive_utc();

    Ok(NewCertificate {
        id: CertificateId::generate(),
        title: CertificateTitle::new(data.title)?,
        issuer: IssuerName::new(data.issuer)?,
        description: Some(CertificateDescription::new(data.description)?),
        image_url: ImageUrl::new(data.image_url)?,
        link: data.link.map(CertificateLink::new).transpose()?,
        issued_date,
        featured: data.featured,
        category_id: CategoryId::new(data.category_id)?,
        skills: data
            .skills
            .iter()
            .map(|name| SkillName::new(*name))
            .collect::<Result<_, _>>()?,
        created_at: now,
        updated_at: now,
    })
}

/// Insert the sample categories, skills and certificates that are missing.
pub fn seed_database<R>(repo: &R) -> Result<SeedReport, SeedError>
where
    R: CategoryReader + CategoryWriter + SkillWriter + CertificateReader + CertificateWriter,
{
    let mut report = SeedReport::default();
    let now = Utc::now().naive_utc();

    for (id, name, color) in SEED_CATEGORIES {
        let id = CategoryId::new(id)?;
        if repo.get_category_by_id(&id)?.is_some() {
            continue;
        }
        repo.create_category(&NewCategory {
            id,
            name: CategoryName::new(name)?,
            color: HexColor::new(color)?,
            created_at: now,
            updated_at: now,
        })?;
        report.categories += 1;
    }
    log::info!("Seeded {} categories", report.categories);

    let requested = SEED_SKILLS
        .iter()
        .map(|name| -> Result<NewSkill, TypeConstraintError> {
            Ok(NewSkill {
                id: SkillId::generate(),
                name: SkillName::new(*name)?,
                color: HexColor::default_skill(),
                created_at: now,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let stored = repo.connect_or_create_skills(&requested)?;
    report.skills = stored
        .iter()
        .zip(&requested)
        .filter(|(stored, requested)| stored.id == requested.id)
        .count();
    log::info!("Seeded {} skills", report.skills);

    let existing = repo.list_certificates()?;
    for data in &SEED_CERTIFICATES {
        let present = existing
            .iter()
            .any(|c| c.title == data.title && c.issuer == data.issuer);
        if present {
            continue;
        }
        repo.create_certificate(&seed_certificate(data)?)?;
        report.certificates += 1;
    }
    log::info!("Seeded {} certificates", report.certificates);

    Ok(report)
}
