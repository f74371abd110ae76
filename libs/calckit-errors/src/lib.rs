//! Core error types for the calculator HTTP surface
//!
//! This crate provides pure data types for error handling, with no hard
//! dependency on an HTTP framework. It includes:
//! - RFC 9457 Problem Details (`Problem`)
//! - Error catalog support (`ErrDef`)
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod problem;

pub use catalog::ErrDef;
pub use problem::{APPLICATION_PROBLEM_JSON, Problem};

/// Helper to attach instance and `trace_id` to a Problem
pub fn finalize(mut p: Problem, instance: &str, trace_id: Option<String>) -> Problem {
    p = p.with_instance(instance);
    if let Some(tid) = trace_id {
        p = p.with_trace_id(tid);
    }
    p
}
