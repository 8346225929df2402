pub mod catalog;
pub mod roi;
