use super::{truncated, MAX_LABEL_LEN, MAX_SYMBOLS};
use crate::lang::LineNumber;

#[derive(Debug)]
struct Symbol {
    name: String,
    line_number: LineNumber,
}

/// ## Symbol table
///
/// Label names mapped to the line number of their defining line. Names
/// are truncated to [`MAX_LABEL_LEN`] bytes. Lookup is a linear scan and
/// the first definition of a duplicated name wins.

#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.symbols.len() >= MAX_SYMBOLS
    }

    pub fn define(&mut self, name: &str, line_number: LineNumber) {
        debug_assert!(!self.is_full());
        self.symbols.push(Symbol {
            name: truncated(name, MAX_LABEL_LEN).to_string(),
            line_number,
        });
    }

    pub fn resolve(&self, name: &str) -> Option<LineNumber> {
        let name = truncated(name, MAX_LABEL_LEN);
        self.symbols
            .iter()
            .find(|symbol| symbol.name == name)
            .map(|symbol| symbol.line_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_resolve() {
        let mut symbols = SymbolTable::new();
        symbols.define("MAIN", 0);
        symbols.define("LOOP", 4);
        assert_eq!(symbols.resolve("MAIN"), Some(0));
        assert_eq!(symbols.resolve("LOOP"), Some(4));
        assert_eq!(symbols.resolve("DONE"), None);
    }

    #[test]
    fn test_first_definition_wins() {
        let mut symbols = SymbolTable::new();
        symbols.define("LOOP", 2);
        symbols.define("LOOP", 7);
        assert_eq!(symbols.resolve("LOOP"), Some(2));
    }

    #[test]
    fn test_long_names_truncate() {
        let mut symbols = SymbolTable::new();
        symbols.define("SUBROUTINE", 3);
        assert_eq!(symbols.resolve("SUBROUTINE"), Some(3));
        assert_eq!(symbols.resolve("SUBROUTI"), Some(3));
        assert_eq!(symbols.resolve("SUBROUT"), None);
    }
}
