use super::board::Cell;
use crate::error::PlayerError;

/// A player's counter. At most three players take part, one per symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Red,
    Yellow,
    Blue,
}

impl Symbol {
    /// Every symbol in the order they are handed out.
    pub const ALL: [Symbol; 3] = [Symbol::Red, Symbol::Yellow, Symbol::Blue];

    /// Convert symbol to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Symbol::Red => Cell::Red,
            Symbol::Yellow => Cell::Yellow,
            Symbol::Blue => Cell::Blue,
        }
    }

    /// Single-character glyph used by the console board
    pub fn glyph(self) -> char {
        match self {
            Symbol::Red => 'r',
            Symbol::Yellow => 'y',
            Symbol::Blue => 'b',
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Red => "Red",
            Symbol::Yellow => "Yellow",
            Symbol::Blue => "Blue",
        }
    }

    /// The symbol that moves after `self` in `turn_order`, wrapping from the
    /// last entry back to the first. A symbol not in the order yields the first.
    pub fn next_in(self, turn_order: &[Symbol]) -> Symbol {
        match turn_order.iter().position(|&s| s == self) {
            Some(i) => turn_order[(i + 1) % turn_order.len()],
            None => turn_order[0],
        }
    }
}

/// Hands out symbols to players in construction order.
#[derive(Debug, Default)]
pub struct SymbolRegistry {
    assigned: usize,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        SymbolRegistry { assigned: 0 }
    }

    /// Claim the next unused symbol.
    pub fn next_symbol(&mut self) -> Result<Symbol, PlayerError> {
        let symbol = Symbol::ALL
            .get(self.assigned)
            .copied()
            .ok_or(PlayerError::SymbolsExhausted {
                available: Symbol::ALL.len(),
            })?;
        self.assigned += 1;
        Ok(symbol)
    }

    /// Symbols handed out so far, in turn order.
    pub fn assigned(&self) -> &'static [Symbol] {
        &Symbol::ALL[..self.assigned]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_in_wraps() {
        assert_eq!(Symbol::Red.next_in(&Symbol::ALL), Symbol::Yellow);
        assert_eq!(Symbol::Yellow.next_in(&Symbol::ALL), Symbol::Blue);
        assert_eq!(Symbol::Blue.next_in(&Symbol::ALL), Symbol::Red);
    }

    #[test]
    fn test_next_in_two_players() {
        let order = [Symbol::Red, Symbol::Yellow];
        assert_eq!(Symbol::Yellow.next_in(&order), Symbol::Red);
    }

    #[test]
    fn test_symbol_name_and_glyph() {
        assert_eq!(Symbol::Blue.name(), "Blue");
        assert_eq!(Symbol::Yellow.glyph(), 'y');
    }

    #[test]
    fn test_registry_hands_out_in_order() {
        let mut registry = SymbolRegistry::new();
        assert_eq!(registry.next_symbol().unwrap(), Symbol::Red);
        assert_eq!(registry.next_symbol().unwrap(), Symbol::Yellow);
        assert_eq!(registry.assigned(), &[Symbol::Red, Symbol::Yellow]);
        assert_eq!(registry.next_symbol().unwrap(), Symbol::Blue);
    }

    #[test]
    fn test_registry_fourth_symbol_fails() {
        let mut registry = SymbolRegistry::new();
        for _ in 0..3 {
            registry.next_symbol().unwrap();
        }
        assert!(matches!(
            registry.next_symbol(),
            Err(PlayerError::SymbolsExhausted { available: 3 })
        ));
        assert_eq!(registry.assigned().len(), 3);
    }
}
