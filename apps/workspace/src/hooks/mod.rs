pub mod documents;
pub mod tutorial;
