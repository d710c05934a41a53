//! Project Euler: no input at all.

use num_bigint::BigUint;

fn multiples_of_3_or_5(below: u32) -> BigUint {
    (1..below)
        .filter(|i| i % 3 == 0 || i % 5 == 0)
        .map(BigUint::from)
        .sum()
}

#[solvekit::solution(platform = "ProjectEuler")]
fn p1() {
    println!(
        "Sum of all natural numbers in [1,1000) that are multiples of {{3,5}}:\n{}",
        multiples_of_3_or_5(1000)
    );
}

fn even_fibonacci_sum(limit: u64) -> BigUint {
    let (mut a, mut b) = (1u64, 2u64);
    let mut sum = BigUint::from(0u32);
    while b <= limit {
        if b % 2 == 0 {
            sum += b;
        }
        (a, b) = (b, a + b);
    }
    sum
}

#[solvekit::solution(platform = "ProjectEuler")]
fn p2() {
    println!(
        "Sum of all even Fibonacci numbers in [1,4_million]:\n{}",
        even_fibonacci_sum(4_000_000)
    );
}

fn largest_prime_factor(mut n: u64) -> u64 {
    let mut largest = 1;
    let mut factor = 2;
    while factor * factor <= n {
        while n % factor == 0 {
            largest = factor;
            n /= factor;
        }
        factor += 1;
    }
    if n > 1 { n } else { largest }
}

#[solvekit::solution(platform = "ProjectEuler")]
fn p3() {
    println!(
        "Largest prime factor of 600851475143:\n{}",
        largest_prime_factor(600_851_475_143)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers() {
        assert_eq!(multiples_of_3_or_5(10), BigUint::from(23u32));
        assert_eq!(multiples_of_3_or_5(1000), BigUint::from(233_168u32));
        assert_eq!(even_fibonacci_sum(4_000_000), BigUint::from(4_613_732u32));
        assert_eq!(largest_prime_factor(13_195), 29);
        assert_eq!(largest_prime_factor(600_851_475_143), 6857);
        assert_eq!(largest_prime_factor(17), 17);
    }
}
