//! Domain models

pub mod book;
pub mod borrow;
