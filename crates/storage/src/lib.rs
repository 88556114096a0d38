#![forbid(unsafe_code)]

pub mod dataset;
pub mod repository;
pub mod sqlite;
