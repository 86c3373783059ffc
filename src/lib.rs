//! # Intake - Project Intake Document Validation
//!
//! Intake validates spreadsheet-based project-intake forms: a language model
//! extracts structured sections from the flattened document text, then a
//! fixed rule set validates each section and a deterministic formatter
//! renders the checklist verdict.
//!
//! ## Overview
//!
//! The pipeline runs one document end to end: read the exported form into a
//! text blob, extract the five intake sections as JSON, validate each section
//! against its rule list, and aggregate the results into a pass/fail report.
//! Malformed extraction output never fails a run; it surfaces as validation
//! issues instead.
//!
//! ## Core Concepts
//!
//! - **Sections**: the five areas of the intake form (header, business case,
//!   problem statement, scope, expected benefits), validated independently
//! - **Issues**: per-field findings with ERROR or WARNING severity; only
//!   errors fail a section
//! - **Providers**: pluggable chat backends for the extraction step (OpenAI,
//!   Azure OpenAI)
//!
//! ## Modules
//!
//! - [`model`] - Issue, result and record types shared by the whole pipeline
//! - [`section`] - Canonical section inputs and the normalization boundary
//! - [`validators`] - The five per-section rule sets
//! - [`pipeline`] - Stage sequencing and the run state
//! - [`report`] - Checklist and issue-listing formatters
//! - [`extract`] - LLM-backed section extraction
//! - [`provider`] - Chat provider abstraction
//! - [`reader`] - Document text readers
//! - [`config`] - Project configuration
//! - [`prompts`] - Bundled extraction prompt and wire schema
//!
//! ## Example
//!
//! ```
//! use intake::pipeline::validate_sections;
//! use intake::report::format_checklist;
//! use intake::section::Sections;
//!
//! let raw = serde_json::json!({
//!     "header": {"fields": {"Project Name": "Apollo"}},
//! });
//! let sections = Sections::from_value(&raw);
//! let record = validate_sections(&sections);
//! let report = format_checklist(&record);
//! assert!(report.contains("NEEDS REVISION"));
//! ```

pub mod config;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod prompts;
pub mod provider;
pub mod reader;
pub mod report;
pub mod section;
pub mod ui;
pub mod validators;
