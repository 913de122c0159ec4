//! Core library exports for the portfolio service.
//!
//! The `data` feature exposes the persistence and domain layer together with
//! the gallery views and the admin editor. The `server` feature adds the
//! actix-web routes, services and seeding used by the binaries.

pub mod db;
pub mod domain;
pub mod dto;
pub mod editor;
pub mod error_conversions;
pub mod forms;
pub mod gallery;
pub mod models;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod seed;
#[cfg(feature = "server")]
pub mod services;
