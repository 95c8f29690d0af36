//! Interchange connection planner.
//!
//! A command-line tool that answers: "if I catch the next train from here,
//! which trains can I change to at the interchange, and which of them go
//! straight to my destination?"

pub mod config;
pub mod domain;
pub mod planner;
pub mod ptv;
pub mod report;
