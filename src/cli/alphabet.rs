//! `codabar alphabet`

use anyhow::Result;
use codabar::encoding::ALPHABET;
use codabar::guards::ALTERNATE_GUARDS;

pub fn handle() -> Result<()> {
    println!("symbol  pattern  modules");
    for (symbol, code) in ALPHABET {
        println!("{:>6}  {}  {:>7}", symbol, code, code.module_len());
    }
    println!();
    println!(
        "alternate guards {} share the patterns of A B C D",
        ALTERNATE_GUARDS.chars().map(String::from).collect::<Vec<_>>().join(" ")
    );
    Ok(())
}
