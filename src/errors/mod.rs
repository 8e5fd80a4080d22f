//! Error types and diagnostic reporting for the scanner.
//!
//! Scanning never fails. The only recoverable condition is an unmatched
//! character, which is handed to a [`errors::DiagnosticSink`] and then
//! skipped. This module contains:
//!
//! - The diagnostic structure with source position information
//! - Sinks that log or collect diagnostics
//! - Caret-style rendering against the source buffer

pub mod errors;
