pub mod catalog;
pub mod models;

#[cfg(test)]
mod catalog_test;
