pub mod app;
pub mod config;
pub mod cqrs;
pub mod queries_handlers;
pub mod rules_loader;
pub mod submission;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
