//! Integration and unit tests for the trivia API.
//!
//! - **support**: in-memory database, router and request helpers
//! - **api_tests**: every endpoint driven through the real router
//! - **quiz_api_tests**: quiz draws end to end
//! - **error_tests**: error envelope and status mapping
//! - **config_tests**: configuration defaults and validation
//! - **db_tests**: schema and query functions
//! - **health_api_tests**: liveness, readiness and version endpoints

pub mod support;
pub mod quiz_api_tests;
