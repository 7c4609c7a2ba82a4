pub mod assignments;
pub mod auth;
pub mod health_test;
