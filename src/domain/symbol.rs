// ============================================================================
// Symbol Table
// The closed set of numeral symbols and their values
// ============================================================================

use super::errors::UnknownSymbolError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single numeral symbol.
///
/// Variants are declared in canonical order, so the derived `Ord` agrees
/// with [`Symbol::value`].
///
/// | Symbol | Value |
/// |--------|-------|
/// | `A`    | 1     |
/// | `B`    | 5     |
/// | `Z`    | 10    |
/// | `L`    | 50    |
/// | `C`    | 100   |
/// | `D`    | 500   |
/// | `R`    | 1000  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    A,
    B,
    Z,
    L,
    C,
    D,
    R,
}

impl Symbol {
    /// Every symbol, in canonical (ascending value) order
    pub const ALL: [Symbol; 7] = [
        Symbol::A,
        Symbol::B,
        Symbol::Z,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::R,
    ];

    /// Numeric value of the symbol.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            Symbol::A => 1,
            Symbol::B => 5,
            Symbol::Z => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::R => 1000,
        }
    }

    /// The character this symbol is written as.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::B => 'B',
            Symbol::Z => 'Z',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::R => 'R',
        }
    }

    /// Look up a character. Case-sensitive: only upper-case letters are symbols.
    #[inline]
    pub const fn from_char(c: char) -> Option<Symbol> {
        match c {
            'A' => Some(Symbol::A),
            'B' => Some(Symbol::B),
            'Z' => Some(Symbol::Z),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'R' => Some(Symbol::R),
            _ => None,
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = UnknownSymbolError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Symbol::from_char(c).ok_or(UnknownSymbolError { symbol: c })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ============================================================================
// Lookup Functions
// ============================================================================

/// Value of a symbol character.
///
/// # Errors
/// Returns [`UnknownSymbolError`] if `c` is not in the symbol set.
#[inline]
pub fn value_of(c: char) -> Result<u32, UnknownSymbolError> {
    Symbol::try_from(c).map(Symbol::value)
}

/// All symbols in canonical order.
#[inline]
pub fn all_symbols() -> &'static [Symbol] {
    &Symbol::ALL
}

/// True iff `c` is one of the numeral symbols.
#[inline]
pub fn is_valid_symbol(c: char) -> bool {
    Symbol::from_char(c).is_some()
}

// ============================================================================
// Display Table
// ============================================================================

/// Human-readable listing of every symbol and its value, sorted by value.
///
/// ```
/// use alien_numerals::domain::SymbolTable;
///
/// let text = SymbolTable.to_string();
/// assert!(text.starts_with("Single Symbol Values:\n  A = 1\n"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolTable;

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Single Symbol Values:")?;
        let mut symbols = Symbol::ALL;
        symbols.sort_by_key(|s| s.value());
        for symbol in symbols {
            writeln!(f, "  {} = {}", symbol, symbol.value())?;
        }
        Ok(())
    }
}
