//! Advent of Code: the input file arrives as lines.

use std::collections::HashMap;

fn first_line(input: &[String]) -> &str {
    input.first().map(String::as_str).unwrap_or_default()
}

fn step(c: char) -> i64 {
    if c == '(' { 1 } else { -1 }
}

/// Floor after every instruction
fn floors(instructions: &str) -> impl Iterator<Item = i64> + '_ {
    instructions.chars().scan(0, |floor, c| {
        *floor += step(c);
        Some(*floor)
    })
}

#[solvekit::solution(platform = "AdventOfCode")]
fn y2015_d01p1(input: &[String]) {
    let mut floor = 0;
    for (i, current) in floors(first_line(input)).enumerate() {
        println!("Step = {i}; Current floor = {current}");
        floor = current;
    }
    println!("\nFinal floor = {floor}");
}

/// 1-based position of the first instruction entering the basement
fn basement_position(instructions: &str) -> Option<usize> {
    floors(instructions).position(|floor| floor == -1).map(|i| i + 1)
}

#[solvekit::solution(platform = "AdventOfCode")]
fn y2015_d01p2(input: &[String]) {
    let position = basement_position(first_line(input)).unwrap_or(0);
    println!("\nResult = {position}");
}

/// Surface area plus the area of the smallest side
fn wrapping_paper(line: &str) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
    let dims = line
        .split('x')
        .map(|d| d.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()?;
    let &[l, w, h] = dims.as_slice() else {
        return Err(format!("expected LxWxH, got {line:?}").into());
    };
    let sides = [l * w, w * h, h * l];
    let slack = sides.iter().min().copied().unwrap_or(0);
    Ok(2 * sides.iter().sum::<u64>() + slack)
}

#[solvekit::solution(platform = "AdventOfCode")]
fn y2015_d02p1(input: &[String]) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut total = 0;
    for (i, line) in input.iter().enumerate() {
        total += wrapping_paper(line)?;
        println!("Step: {i}; Total: {total}");
    }
    println!("\nGrand total wrapping paper needed: {total}");
    Ok(())
}

/// Presents delivered per house, starting with one at the origin
fn deliveries(directions: &str) -> HashMap<(i64, i64), u32> {
    let mut houses = HashMap::from([((0, 0), 1)]);
    let mut pos = (0, 0);
    for c in directions.chars() {
        match c {
            '>' => pos.0 += 1,
            '<' => pos.0 -= 1,
            '^' => pos.1 += 1,
            'v' => pos.1 -= 1,
            _ => continue,
        }
        *houses.entry(pos).or_default() += 1;
    }
    houses
}

#[solvekit::solution(platform = "AdventOfCode")]
fn y2015_d03p1(input: &[String]) {
    let houses = deliveries(first_line(input));
    println!(
        "Total houses that received at least one present: {}",
        houses.len()
    );
}
