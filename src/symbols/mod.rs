//! Identifier bookkeeping fed by the scanner.
//!
//! The scanner reports every identifier occurrence through [`symbol_table::SymbolSink`];
//! deduplication is the table's concern.

pub mod symbol_table;
