//! Step-rate benchmark: serial vs parallel, toroidal vs bounded

use std::time::Instant;

use golife::{EdgePolicy, Life, LifeConfig, Seeding};
use log::info;

fn benchmark(size: usize, config: LifeConfig, iterations: u32) -> golife::Result<f64> {
    let mut life = Life::with_config(size, size, config, Seeding::Random(0x5eed))?;

    let start = Instant::now();
    for _ in 0..iterations {
        life.step();
    }
    info!("{}x{} finished with population {}", size, size, life.population());
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> golife::Result<()> {
    env_logger::init();

    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [64, 256, 512, 1024, 2048];
    let iterations = 20;

    println!(
        "{:>10} {:>12} {:>12} {:>12} {:>10}",
        "Size", "Serial", "Parallel", "Bounded+Par", "Speedup"
    );
    println!("{:-<60}", "");

    for size in sizes {
        let serial_ms = benchmark(size, LifeConfig::default().serial(), iterations)?;
        let parallel_ms = benchmark(size, LifeConfig::default().parallel(), iterations)?;
        let bounded_ms = benchmark(
            size,
            LifeConfig::default()
                .with_edge_policy(EdgePolicy::Bounded)
                .parallel(),
            iterations,
        )?;

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            bounded_ms,
            serial_ms / parallel_ms
        );
    }

    Ok(())
}
