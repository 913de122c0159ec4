pub mod category;
pub mod certificate;
pub mod skill;
pub mod types;
