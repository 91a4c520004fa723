// ============================================================================
// Construction Rules
// Repetition limits and permitted subtractive pairs
// ============================================================================

use super::symbol::Symbol;

/// Maximum run length of each symbol in a well-formed numeral.
///
/// Symbols worth `1×10^k` may repeat up to three times; symbols worth
/// `5×10^k` may not repeat.
pub const REPETITION_LIMITS: [(Symbol, usize); 7] = [
    (Symbol::A, 3),
    (Symbol::B, 1),
    (Symbol::Z, 3),
    (Symbol::L, 1),
    (Symbol::C, 3),
    (Symbol::D, 1),
    (Symbol::R, 3),
];

/// Most larger symbols a single symbol may be subtracted from
pub const MAX_SUCCESSORS: usize = 2;

/// Subtractive pairs: each entry lists the larger symbols a smaller one may precede.
///
/// Symbols without an entry may never precede a larger symbol.
pub const SUBTRACTION_RULES: [(Symbol, &[Symbol]); 3] = [
    (Symbol::A, &[Symbol::B, Symbol::Z]),
    (Symbol::Z, &[Symbol::L, Symbol::C]),
    (Symbol::C, &[Symbol::D, Symbol::R]),
];

impl Symbol {
    /// Maximum number of consecutive occurrences allowed.
    pub fn repetition_limit(self) -> usize {
        REPETITION_LIMITS
            .iter()
            .find(|(s, _)| *s == self)
            .map(|(_, limit)| *limit)
            .unwrap_or(1)
    }

    /// Larger symbols this one may be subtracted from (empty if none).
    pub fn permitted_successors(self) -> &'static [Symbol] {
        SUBTRACTION_RULES
            .iter()
            .find(|(s, _)| *s == self)
            .map(|(_, successors)| *successors)
            .unwrap_or(&[])
    }

    /// True if `self` immediately before `larger` is a legal subtractive pair.
    #[inline]
    pub fn may_precede(self, larger: Symbol) -> bool {
        self.permitted_successors().contains(&larger)
    }
}

/// Check that the symbol, repetition and subtraction tables agree.
///
/// Verifies that values strictly increase in canonical order, that every
/// symbol has exactly one repetition limit (3 for `1×10^k`, 1 for `5×10^k`),
/// and that every subtractive pair goes from a smaller to a larger value.
pub fn verify_tables() -> Result<(), String> {
    for pair in Symbol::ALL.windows(2) {
        if pair[0].value() >= pair[1].value() {
            return Err(format!(
                "symbol values must strictly increase: {} = {} is not below {} = {}",
                pair[0],
                pair[0].value(),
                pair[1],
                pair[1].value()
            ));
        }
    }

    for symbol in Symbol::ALL {
        let entries = REPETITION_LIMITS
            .iter()
            .filter(|(s, _)| *s == symbol)
            .count();
        if entries != 1 {
            return Err(format!(
                "symbol {} has {} repetition limit entries",
                symbol, entries
            ));
        }

        let mut value = symbol.value();
        while value % 10 == 0 {
            value /= 10;
        }
        let expected = if value == 5 { 1 } else { 3 };
        if symbol.repetition_limit() != expected {
            return Err(format!(
                "symbol {} must have repetition limit {}, found {}",
                symbol,
                expected,
                symbol.repetition_limit()
            ));
        }
    }

    check_subtraction_rules(&SUBTRACTION_RULES)
}

fn check_subtraction_rules(rules: &[(Symbol, &[Symbol])]) -> Result<(), String> {
    for &(small, successors) in rules {
        if successors.is_empty() {
            return Err(format!("subtraction rule for {} lists no successors", small));
        }
        if successors.len() > MAX_SUCCESSORS {
            return Err(format!(
                "subtraction rule for {} lists {} successors, at most {} allowed",
                small,
                successors.len(),
                MAX_SUCCESSORS
            ));
        }
        for large in successors {
            if small.value() >= large.value() {
                return Err(format!(
                    "subtractive pair {}{} does not go from a smaller to a larger value",
                    small, large
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_consistent() {
        assert_eq!(verify_tables(), Ok(()));
    }

    #[test]
    fn test_oversized_subtraction_rule_rejected() {
        let rules: [(Symbol, &[Symbol]); 1] =
            [(Symbol::A, &[Symbol::B, Symbol::Z, Symbol::L])];
        let err = check_subtraction_rules(&rules).unwrap_err();
        assert_eq!(
            err,
            "subtraction rule for A lists 3 successors, at most 2 allowed"
        );

        let rules: [(Symbol, &[Symbol]); 1] = [(Symbol::Z, &[Symbol::A])];
        assert!(check_subtraction_rules(&rules).is_err());
    }

    #[test]
    fn test_repetition_limits() {
        assert_eq!(Symbol::A.repetition_limit(), 3);
        assert_eq!(Symbol::B.repetition_limit(), 1);
        assert_eq!(Symbol::Z.repetition_limit(), 3);
        assert_eq!(Symbol::L.repetition_limit(), 1);
        assert_eq!(Symbol::C.repetition_limit(), 3);
        assert_eq!(Symbol::D.repetition_limit(), 1);
        assert_eq!(Symbol::R.repetition_limit(), 3);
    }

    #[test]
    fn test_permitted_successors() {
        assert_eq!(Symbol::A.permitted_successors(), &[Symbol::B, Symbol::Z]);
        assert_eq!(Symbol::Z.permitted_successors(), &[Symbol::L, Symbol::C]);
        assert_eq!(Symbol::C.permitted_successors(), &[Symbol::D, Symbol::R]);
        for symbol in [Symbol::B, Symbol::L, Symbol::D, Symbol::R] {
            assert!(symbol.permitted_successors().is_empty());
        }
    }

    #[test]
    fn test_may_precede() {
        assert!(Symbol::A.may_precede(Symbol::B));
        assert!(Symbol::C.may_precede(Symbol::R));
        assert!(!Symbol::A.may_precede(Symbol::L));
        assert!(!Symbol::B.may_precede(Symbol::Z));
    }
}
