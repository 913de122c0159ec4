pub mod categories;
pub mod certificates;
pub mod skills;
