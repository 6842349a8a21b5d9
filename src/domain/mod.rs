pub mod catalog;
pub mod error;
pub mod number;
pub mod sale;
