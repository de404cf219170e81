//! Iskolar scholarship platform library.
//!
//! The heart of the crate is [`eligibility`]: a declarative rule engine
//! that decides whether a student profile satisfies a scholarship's
//! eligibility criteria and explains the verdict per criterion. The rest
//! is the ambient plumbing the API service needs: configuration,
//! telemetry, and error types.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
