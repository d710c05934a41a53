//! LeetCode: inputs are hard-coded and picked by test number.

fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    // Quadratic on purpose; this is a harness demo.
    (0..nums.len()).find_map(|i| {
        (i + 1..nums.len())
            .find(|&j| nums[i] + nums[j] == target)
            .map(|j| (i, j))
    })
}

#[solvekit::solution(platform = "LeetCode")]
fn p1(test: u8) {
    let (nums, target): (&[i32], i32) = match test {
        1 => (&[2, 7, 11, 15][..], 9),
        2 => (&[3, 2, 4][..], 6),
        3 => (&[3, 3][..], 6),
        _ => (&[][..], 0),
    };

    match two_sum(nums, target) {
        Some((i, j)) => println!("[{i}, {j}]"),
        None => println!("[]"),
    }
}
