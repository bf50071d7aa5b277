pub mod fetch_service;

#[cfg(test)]
mod fetch_service_test;
