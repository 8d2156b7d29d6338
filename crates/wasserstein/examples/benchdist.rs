//! Timing harness for repeated distance calls.
//!
//! Builds two fixed small distributions, computes their weighted and unweighted
//! distances in a tight loop, and prints the elapsed wall-clock time and the last
//! distance for each. The reusable calculator is timed alongside the stateless
//! entry points.
//!
//! Run with `cargo run --release --example benchdist`.

use std::hint::black_box;
use std::time::Instant;
use wasserstein::prelude::*;

const N: usize = 200_000;

fn main() -> Result<(), WassersteinError> {
    let av = vec![3.4_f64, 3.9, 7.5, 7.8];
    let aw = vec![1.4, 0.9, 3.1, 7.2];
    let bv = vec![4.5, 1.4];
    let bw = vec![3.2, 3.5];

    println!("{}", "=".repeat(60));
    println!("Wasserstein distance - {N} iterations per entry point");
    println!("{}", "=".repeat(60));

    // Weighted, stateless entry point
    let mut dist = 0.0;
    let start = Instant::now();
    for _ in 0..N {
        dist = wasserstein_weighted(black_box(&av), &aw, black_box(&bv), &bw)?;
    }
    report("wasserstein_weighted", start, dist);

    // Unweighted, stateless entry point
    let start = Instant::now();
    for _ in 0..N {
        dist = wasserstein(black_box(&av), black_box(&bv))?;
    }
    report("wasserstein", start, dist);

    // Reusable calculator: buffers are allocated once
    let mut calc = Wasserstein::new().capacity(av.len() + bv.len()).build()?;

    let start = Instant::now();
    for _ in 0..N {
        dist = calc.distance_weighted(black_box(&av), &aw, black_box(&bv), &bw)?;
    }
    report("calculator (weighted)", start, dist);

    let start = Instant::now();
    for _ in 0..N {
        dist = calc.distance(black_box(&av), black_box(&bv))?;
    }
    report("calculator (unweighted)", start, dist);

    /* Expected Output (timings vary):
    wasserstein_weighted
      Time: 0.0xx seconds
      The earth movers distance is: 4.078133143804786
    wasserstein
      Time: 0.0xx seconds
      The earth movers distance is: 2.7
    ...
    */

    Ok(())
}

fn report(label: &str, start: Instant, dist: f64) {
    let elapsed = start.elapsed();
    println!("{label}");
    println!("  Time: {} seconds", elapsed.as_secs_f64());
    println!("  The earth movers distance is: {dist}");
}
