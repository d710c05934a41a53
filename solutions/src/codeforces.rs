//! Codeforces: input arrives on stdin.

use crate::stdin::Scanner;

/// Flagstones of size `a` needed to cover an `n` by `m` square
fn flagstones(n: u64, m: u64, a: u64) -> u64 {
    n.div_ceil(a) * m.div_ceil(a)
}

#[solvekit::solution(platform = "Codeforces", name = "p1A")]
fn p1a() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut scanner = Scanner::stdin();
    let n = scanner.read()?;
    let m = scanner.read()?;
    let a = scanner.read()?;
    println!("{}", flagstones(n, m, a));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theatre_square() {
        assert_eq!(flagstones(6, 6, 4), 4);
        assert_eq!(flagstones(1_000_000_000, 1_000_000_000, 1), 1_000_000_000_000_000_000);
    }
}
