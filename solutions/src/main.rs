//! Sample solutions, one module per platform.
//!
//! ```text
//! cargo run -p solutions -- AdventOfCode.y2015_d01p1-1
//! cargo run -p solutions --release -- UVa.p100-1B200S
//! cargo run -p solutions -- list
//! ```
//!
//! Inputs are read from `inputs/` as configured in `solvekit.toml`.

mod advent_of_code;
mod atcoder;
mod codeforces;
mod leetcode;
mod project_euler;
mod spoj;
mod stdin;
mod uva;

fn main() -> anyhow::Result<()> {
    solvekit::run()
}
