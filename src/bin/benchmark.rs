//! Time the sparse step at several grid sizes and fill densities

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use sparse_life::domain::{Bounds, seed_random, step};

/// Average milliseconds per generation, plus the final population
fn benchmark_step(size: u32, density: f64, iterations: u32) -> (f64, usize) {
    let bounds = Bounds::new(size, size);
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let draws = (bounds.area() as f64 * density) as usize;
    let mut live = seed_random(draws, bounds, &mut rng);

    let start = Instant::now();
    for _ in 0..iterations {
        live = step(&live, bounds);
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, live.len())
}

fn main() {
    println!("=== Sparse Life Step Benchmark ===\n");

    let sizes = [50, 120, 250, 500, 1000];
    let densities = [0.01, 0.05, 0.3];
    let iterations = 20;

    println!("{:>10} {:>9} {:>12} {:>12}", "Size", "Density", "ms/gen", "Alive");
    println!("{:-<46}", "");

    for size in sizes {
        for density in densities {
            let (ms, alive) = benchmark_step(size, density, iterations);
            println!(
                "{:>10} {:>8.0}% {:>12.3} {:>12}",
                format!("{}x{}", size, size),
                density * 100.0,
                ms,
                alive
            );
        }
    }
}
