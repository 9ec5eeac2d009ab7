pub mod catalog;
pub mod nodes;
pub mod people;
