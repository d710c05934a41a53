//! UVa: input arrives on stdin.

use crate::stdin::Scanner;
use std::fmt::Write;

/// Length of the 3n+1 sequence starting at `n`, counting `n` and 1
fn cycle_length(n: u64) -> u32 {
    let mut value = n;
    let mut count = 1;
    while value > 1 {
        value = if value % 2 == 1 { 3 * value + 1 } else { value / 2 };
        count += 1;
    }
    count
}

fn max_cycle_length(i: u64, j: u64) -> u32 {
    (i.min(j)..=i.max(j)).map(cycle_length).max().unwrap_or(0)
}

#[solvekit::solution(platform = "UVa")]
fn p100() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut scanner = Scanner::stdin();
    let mut out = String::new();
    while let Some(i) = scanner.next::<u64>()? {
        let j: u64 = scanner.read()?;
        writeln!(out, "{i} {j} {}", max_cycle_length(i, j))?;
    }
    print!("{out}");
    Ok(())
}
