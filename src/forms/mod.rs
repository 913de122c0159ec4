pub mod categories;
pub mod certificates;
