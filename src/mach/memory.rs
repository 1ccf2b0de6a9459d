use super::{Cell, MEMORY_SIZE};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Main memory
///
/// Flat array of cells, zeroed at construction. Addresses are cell
/// values and must be in range.

pub struct Memory {
    cells: Vec<Cell>,
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Memory[{}]", self.cells.len())
    }
}

impl Memory {
    pub fn new() -> Memory {
        Memory {
            cells: vec![0; MEMORY_SIZE],
        }
    }

    pub fn fetch(&self, address: Cell) -> Result<Cell> {
        Ok(self.cells[Memory::index(address)?])
    }

    pub fn store(&mut self, address: Cell, value: Cell) -> Result<()> {
        self.cells[Memory::index(address)?] = value;
        Ok(())
    }

    fn index(address: Cell) -> Result<usize> {
        match usize::try_from(address) {
            Ok(index) if index < MEMORY_SIZE => Ok(index),
            _ => Err(error!(AddressOutOfRange)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_fetch() {
        let mut memory = Memory::new();
        assert_eq!(memory.fetch(0).unwrap(), 0);
        memory.store(100, 42).unwrap();
        assert_eq!(memory.fetch(100).unwrap(), 42);
    }

    #[test]
    fn test_address_range() {
        let mut memory = Memory::new();
        assert!(memory.fetch(-1).is_err());
        assert!(memory.store(MEMORY_SIZE as Cell, 1).is_err());
        assert!(memory.fetch(MEMORY_SIZE as Cell - 1).is_ok());
    }
}
