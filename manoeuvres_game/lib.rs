pub mod battle;
pub mod catalog;
pub mod eligibility;
pub mod rules;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
