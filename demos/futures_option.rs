// demos/futures_option.rs
use futures_carry::analytics::price_futures_call;
use futures_carry::config::AppConfig;
use futures_carry::math_utils::Timer;
use futures_carry::mc::mc_price_futures_call;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(market = ?cfg.market, simulation = ?cfg.simulation, "pricing futures call");

    let analytic = match price_futures_call(&cfg.market) {
        Ok(res) => res,
        Err(e) => {
            tracing::error!("closed-form pricing failed: {e}");
            std::process::exit(1);
        }
    };

    println!("Black-76 futures option");
    println!("=======================");
    println!("{}\n", analytic);

    let mut timer = Timer::new();
    timer.start();
    let mc = match mc_price_futures_call(&cfg.market, &cfg.simulation) {
        Ok(res) => res,
        Err(e) => {
            tracing::error!("Monte Carlo pricing failed: {e}");
            std::process::exit(1);
        }
    };
    let elapsed_ms = timer.elapsed_ms();

    println!("Monte Carlo ({} samples)", mc.num_samples);
    println!("=======================");
    match mc.std_error {
        Some(se) => println!("Call price: {:.4} ± {:.4}", mc.price, se),
        None => println!("Call price: {:.4}", mc.price),
    }
    println!("Difference vs closed form: {:+.5}", mc.price - analytic.call_price);
    tracing::info!(seed = ?mc.seed, elapsed_ms, "Monte Carlo finished");
}
