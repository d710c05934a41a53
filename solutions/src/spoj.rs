//! SPOJ: input arrives on stdin.

use std::io::BufRead;

/// Numbers up to, not including, the first 42
fn until_42(input: impl BufRead) -> Result<Vec<i64>, Box<dyn std::error::Error + Send + Sync>> {
    let mut out = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let n: i64 = line.parse()?;
        if n == 42 {
            break;
        }
        out.push(n);
    }
    Ok(out)
}

#[solvekit::solution(platform = "SPOJ")]
fn p1() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    for n in until_42(std::io::stdin().lock())? {
        println!("{n}");
    }
    Ok(())
}
