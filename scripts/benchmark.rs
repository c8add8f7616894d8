// scripts/benchmark.rs
use futures_carry::analytics::price_futures_call;
use futures_carry::math_utils::Timer;
use futures_carry::mc::{mc_price_futures_call, SimulationConfig};
use futures_carry::models::MarketParameters;
use std::env;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    physical_cores: usize,
    rayon_threads: usize,
    rustc_flags: String,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            physical_cores: num_cpus::get_physical(),
            rayon_threads: rayon::current_num_threads(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    samples: usize,
    time_ms: f64,
    throughput_samples_per_sec: f64,
    value: f64,
    std_error: Option<f64>,
    abs_error: f64,
}

fn run_monte_carlo_benchmarks(params: &MarketParameters, analytic: f64) -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    let sample_configs = [10_000, 100_000, 1_000_000];
    let variants = [
        ("serial", false, false),
        ("parallel", true, false),
        ("parallel + antithetic", true, true),
    ];

    for &samples in &sample_configs {
        println!("Running benchmarks with {} samples...", samples);

        for &(label, parallel, use_antithetic) in &variants {
            let cfg = SimulationConfig {
                num_samples: samples,
                seed: Some(42),
                use_antithetic,
                parallel,
            };

            let mut timer = Timer::new();
            timer.start();
            let mc = match mc_price_futures_call(params, &cfg) {
                Ok(res) => res,
                Err(e) => {
                    tracing::error!("{label} run with {samples} samples failed: {e}");
                    continue;
                }
            };
            let time_ms = timer.elapsed_ms();

            results.push(BenchmarkResult {
                name: format!("Futures call, {} ({}k)", label, samples / 1000),
                samples,
                time_ms,
                throughput_samples_per_sec: samples as f64 / (time_ms / 1000.0),
                value: mc.price,
                std_error: mc.std_error,
                abs_error: (mc.price - analytic).abs(),
            });
        }
    }

    results
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("futures-carry Monte Carlo Benchmark");
    println!("===================================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  Logical Cores: {}", system_info.cpu_cores);
    println!("  Physical Cores: {}", system_info.physical_cores);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!();

    let params = MarketParameters::new(1.20, 0.02, 0.01, 0.0, 0.5, 1.25, 0.25);
    let analytic = match price_futures_call(&params) {
        Ok(res) => res.call_price,
        Err(e) => {
            tracing::error!("closed-form pricing failed: {e}");
            std::process::exit(1);
        }
    };

    let results = run_monte_carlo_benchmarks(&params, analytic);

    println!("\n{:=<100}", "");
    println!("BENCHMARK RESULTS (closed form {:.6})", analytic);
    println!("{:=<100}", "");
    println!(
        "{:<38} {:>9} {:>11} {:>15} {:>10} {:>10} {:>10}",
        "Benchmark", "Samples", "Time (ms)", "Throughput", "Value", "Std Err", "Abs Err"
    );
    println!("{:-<100}", "");

    for result in &results {
        println!(
            "{:<38} {:>9} {:>11.2} {:>15.0} {:>10.6} {:>10} {:>10.6}",
            result.name,
            result.samples,
            result.time_ms,
            result.throughput_samples_per_sec,
            result.value,
            result
                .std_error
                .map(|se| format!("{:.6}", se))
                .unwrap_or_else(|| "N/A".to_string()),
            result.abs_error
        );
    }

    println!("{:=<100}", "");
    println!("\nRun with: cargo run --bin benchmark --release");
}
