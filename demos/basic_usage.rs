// ============================================================================
// Basic Usage Example
// ============================================================================

use alien_numerals::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Alien Numerals Example ===\n");
    print!("{}", SymbolTable);

    // Unchecked resolution
    println!("\n=== Resolve ===");
    for (numeral, expected) in [("AAA", 3), ("LBAAA", 58), ("RCRZCAB", 1994)] {
        let result = resolve(numeral).unwrap();
        let status = if result == expected { "PASS" } else { "FAIL" };
        println!(
            "  {:<15} -> {:>5} (expected {:>5}) {}",
            numeral, result, expected, status
        );
    }

    for numeral in ["A", "B", "AB", "BA", "Z", "AA", "R", "RR", "RCRZ", "CDZCAB"] {
        println!("  {:<15} -> {:>5}", numeral, resolve(numeral).unwrap());
    }

    // Checked conversion
    println!("\n=== Safe Conversion ===");
    for numeral in ["AB", "AAAA", "AL", "BZ", "XYZ", ""] {
        match to_integer_safe(numeral) {
            Ok(value) => println!("  {:<15} -> {}", numeral, value),
            Err(reason) => println!("  {:<15} -> invalid: {}", numeral, reason),
        }
    }

    // Configured converter with event logging
    println!("\n=== Converter ===");
    let converter = NumeralConverterBuilder::interactive()
        .build(Arc::new(LoggingEventHandler))
        .expect("symbol tables are consistent");

    for input in ["  lbaaa ", "zaz", "ccccz"] {
        match converter.convert(input) {
            Ok(value) => println!("  {:<15?} -> {}", input, value),
            Err(err) => println!("  {:<15?} -> invalid: {}", input, err),
        }
    }
}
