// src/mc/mc_engine.rs
use crate::analytics::cost_of_carry::futures_price;
use crate::error::{validation::*, PricingResult};
use crate::math_utils::CompensatedSum;
use crate::models::gbm::TerminalSampler;
use crate::models::{ForwardGbm, MarketParameters};
use crate::rng::{self, RngFactory};
use rand::Rng;
use rayon::prelude::*;

/// Sample count used when none is configured
pub const DEFAULT_SAMPLES: usize = 100_000;

/// Samples per independent random stream in the chunked engine. Fixed so
/// that the (seed, chunk) → draws mapping never depends on the thread pool.
pub const CHUNK_SIZE: usize = 16_384;

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub num_samples: usize,
    /// Base seed; `None` draws one from the thread RNG and reports it back
    pub seed: Option<u64>,
    pub use_antithetic: bool,
    pub parallel: bool,
}

impl SimulationConfig {
    pub fn validate(&self) -> PricingResult<()> {
        validate_samples(self.num_samples)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_samples: DEFAULT_SAMPLES,
            seed: None,
            use_antithetic: false,
            parallel: true,
        }
    }
}

/// Monte Carlo estimate of the discounted call value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationResult {
    pub price: f64,
    pub num_samples: usize,
    /// Standard error of `price`; `None` for a single sample
    pub std_error: Option<f64>,
    /// Base seed of the chunked engine, `None` for a caller-supplied generator
    pub seed: Option<u64>,
}

/// Compensated first and second moments of the undiscounted payoff
#[derive(Clone, Copy, Debug, Default)]
struct PayoffMoments {
    sum: CompensatedSum,
    sum_sq: CompensatedSum,
    count: usize,
}

impl PayoffMoments {
    fn push(&mut self, payoff: f64) {
        self.sum.add(payoff);
        self.sum_sq.add(payoff * payoff);
        self.count += 1;
    }

    fn merge(&mut self, other: &PayoffMoments) {
        self.sum.merge(&other.sum);
        self.sum_sq.merge(&other.sum_sq);
        self.count += other.count;
    }
}

/// Terminal futures price sampler plus the call payoff
struct CallSimulation {
    sampler: TerminalSampler,
    strike: f64,
    antithetic: bool,
}

impl CallSimulation {
    fn new(forward: f64, t: f64, strike: f64, sigma: f64, antithetic: bool) -> Self {
        CallSimulation {
            sampler: ForwardGbm::new(forward, sigma).terminal_sampler(t),
            strike,
            antithetic,
        }
    }

    #[inline]
    fn payoff(&self, z: f64) -> f64 {
        (self.sampler.sample(z) - self.strike).max(0.0)
    }

    /// One sample: a single draw, or the average over the antithetic pair (Z, -Z)
    #[inline]
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z = rng::get_normal_draw(rng);
        if self.antithetic {
            0.5 * (self.payoff(z) + self.payoff(-z))
        } else {
            self.payoff(z)
        }
    }

    fn run<R: Rng + ?Sized>(&self, samples: usize, rng: &mut R) -> PayoffMoments {
        let mut moments = PayoffMoments::default();
        for _ in 0..samples {
            moments.push(self.draw(rng));
        }
        moments
    }
}

fn validate_inputs(forward: f64, r: f64, t: f64, strike: f64, sigma: f64) -> PricingResult<()> {
    validate_positive_or_overflow("futures_price", forward)?;
    validate_finite("rate", r)?;
    validate_positive("maturity", t)?;
    validate_positive("strike", strike)?;
    validate_positive("volatility", sigma)?;
    Ok(())
}

fn summarize(moments: &PayoffMoments, discount: f64, seed: Option<u64>) -> SimulationResult {
    let n = moments.count as f64;
    let mean = moments.sum.total() / n;
    let price = discount * mean;

    let std_error = if moments.count > 1 {
        // Unbiased sample variance. Tiny negatives are rounding noise; NaN
        // from an overflowed run is kept.
        let raw = (moments.sum_sq.total() / n - mean * mean) * n / (n - 1.0);
        let variance = if raw < 0.0 { 0.0 } else { raw };
        Some(discount * (variance / n).sqrt())
    } else {
        None
    };

    if !price.is_finite() {
        tracing::warn!(price, samples = moments.count, "non-finite Monte Carlo estimate");
    }

    SimulationResult {
        price,
        num_samples: moments.count,
        std_error,
        seed,
    }
}

/// Monte Carlo price of a European call on a futures price, drawing from the
/// caller's generator.
///
/// # Math Framework
///
/// The futures price is simulated directly under the futures measure, where
/// it is a martingale:
/// ```text
/// F_T = F * exp(-σ²T/2 + σ√T * Z),   Z ~ N(0,1)
/// C ≈ e^(-rT) * mean(max(F_T - X, 0))
/// ```
/// There is deliberately no `r` in the exponent. The carry is already in `F`;
/// an extra risk-free drift would price a different (wrong) contract.
///
/// Draws are consumed sequentially from `rng`, so a seeded generator gives a
/// bit-reproducible estimate.
///
/// # Errors
///
/// `InvalidInput` when `num_samples == 0`, when `forward` is NaN or not
/// positive, when `t`, `strike` or `sigma` is not finite and strictly
/// positive, or when `r` is non-finite. A `forward` that overflowed to `+inf`
/// is simulated and yields a non-finite price.
pub fn monte_carlo_call_price<R: Rng + ?Sized>(
    forward: f64,
    r: f64,
    t: f64,
    strike: f64,
    sigma: f64,
    num_samples: usize,
    rng: &mut R,
) -> PricingResult<SimulationResult> {
    validate_samples(num_samples)?;
    validate_inputs(forward, r, t, strike, sigma)?;

    let sim = CallSimulation::new(forward, t, strike, sigma, false);
    let moments = sim.run(num_samples, rng);
    let result = summarize(&moments, (-r * t).exp(), None);

    tracing::debug!(
        forward,
        strike,
        samples = num_samples,
        price = result.price,
        std_error = ?result.std_error,
        "Monte Carlo futures call (caller generator)"
    );
    Ok(result)
}

/// Seeded Monte Carlo price on the chunked engine.
///
/// Samples are split into [`CHUNK_SIZE`] blocks; block `i` draws from
/// `RngFactory::new(seed).create_std_rng(i)`, a stream no other (seed, block)
/// pair shares. Blocks are reduced in index order with
/// compensated sums, so the estimate is bit-identical for a given seed
/// whether `cfg.parallel` is set or not, and for any rayon pool size.
pub fn monte_carlo_call_price_chunked(
    forward: f64,
    r: f64,
    t: f64,
    strike: f64,
    sigma: f64,
    cfg: &SimulationConfig,
) -> PricingResult<SimulationResult> {
    cfg.validate()?;
    validate_inputs(forward, r, t, strike, sigma)?;

    let factory = match cfg.seed {
        Some(seed) => RngFactory::new(seed),
        None => RngFactory::from_entropy(),
    };
    let n = cfg.num_samples;
    let n_chunks = (n + CHUNK_SIZE - 1) / CHUNK_SIZE;
    let sim = CallSimulation::new(forward, t, strike, sigma, cfg.use_antithetic);

    let run_chunk = |chunk: usize| {
        let start = chunk * CHUNK_SIZE;
        let len = CHUNK_SIZE.min(n - start);
        let mut rng = factory.create_std_rng(chunk as u64);
        sim.run(len, &mut rng)
    };

    let chunks: Vec<PayoffMoments> = if cfg.parallel {
        (0..n_chunks).into_par_iter().map(run_chunk).collect()
    } else {
        (0..n_chunks).map(run_chunk).collect()
    };

    let mut total = PayoffMoments::default();
    for chunk in &chunks {
        total.merge(chunk);
    }

    let result = summarize(&total, (-r * t).exp(), Some(factory.base_seed()));
    tracing::debug!(
        forward,
        strike,
        samples = n,
        chunks = n_chunks,
        seed = factory.base_seed(),
        antithetic = cfg.use_antithetic,
        parallel = cfg.parallel,
        price = result.price,
        std_error = ?result.std_error,
        "Monte Carlo futures call"
    );
    Ok(result)
}

/// Cost-of-carry futures price followed by the chunked Monte Carlo estimate.
pub fn mc_price_futures_call(
    params: &MarketParameters,
    cfg: &SimulationConfig,
) -> PricingResult<SimulationResult> {
    params.validate()?;
    let forward = futures_price(params)?;
    monte_carlo_call_price_chunked(
        forward,
        params.rate,
        params.maturity,
        params.strike,
        params.volatility,
        cfg,
    )
}
