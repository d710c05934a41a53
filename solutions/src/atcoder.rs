//! AtCoder: input arrives on stdin.

use crate::stdin::Scanner;

fn is_isosceles(a: i32, b: i32, c: i32) -> bool {
    a == b || a == c || b == c
}

#[solvekit::solution(platform = "AtCoder", name = "ABC424A")]
fn abc424a() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut scanner = Scanner::stdin();
    let (a, b, c) = (scanner.read()?, scanner.read()?, scanner.read()?);
    println!("{}", if is_isosceles(a, b, c) { "Yes" } else { "No" });
    Ok(())
}
