use std::{collections::HashMap, fmt::Display};

/// Receives one call per identifier token, in scan order.
pub trait SymbolSink {
    fn record_identifier(&mut self, lexeme: &str, line: u32);
}

impl<T: SymbolSink + ?Sized> SymbolSink for &mut T {
    fn record_identifier(&mut self, lexeme: &str, line: u32) {
        (**self).record_identifier(lexeme, line);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub first_line: u32,
    pub occurrences: usize,
    pub lines: Vec<u32>,
}

/// Distinct identifiers in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    pub fn add_identifier(&mut self, name: &str, line: u32) {
        if let Some(&slot) = self.index.get(name) {
            let entry = &mut self.entries[slot];
            entry.occurrences += 1;
            entry.lines.push(line);
            return;
        }

        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(SymbolEntry {
            name: name.to_string(),
            first_line: line,
            occurrences: 1,
            lines: vec![line],
        });
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.index.get(name).map(|slot| &self.entries[*slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter()
    }
}

impl SymbolSink for SymbolTable {
    fn record_identifier(&mut self, lexeme: &str, line: u32) {
        self.add_identifier(lexeme, line);
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Symbol Table:")?;

        let width = self
            .entries
            .iter()
            .map(|entry| entry.name.len() + 2)
            .max()
            .unwrap_or(0)
            .max("Name".len());

        writeln!(f, "{:<width$} | {:>10} | {:>5}", "Name", "First Line", "Count")?;

        for entry in &self.entries {
            let quoted = format!("{:?}", entry.name);
            writeln!(
                f,
                "{:<width$} | {:>10} | {:>5}",
                quoted, entry.first_line, entry.occurrences
            )?;
        }

        Ok(())
    }
}
