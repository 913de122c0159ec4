pub mod category;
pub mod certificate;
#[cfg(feature = "server")]
pub mod config;
pub mod skill;
