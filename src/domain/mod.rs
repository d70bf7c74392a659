pub mod business;
pub mod category;
pub mod error;
