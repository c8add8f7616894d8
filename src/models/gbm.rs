// src/models/gbm.rs
//! Driftless geometric Brownian motion for a futures price.
//!
//! Under the futures (T-forward) measure the futures price is a martingale:
//! ```text
//! dF_t = σ F_t dW_t
//! F_T  = F_0 * exp(-σ²T/2 + σ√T * Z),   Z ~ N(0,1)
//! ```
//! The `-σ²T/2` term is the convexity correction that makes `E[F_T] = F_0`.
//! No `r` drift belongs here: the cost of carry is already inside `F_0`, and
//! adding `r T` again would double count it and overprice every call.

pub struct ForwardGbm {
    pub f0: f64,
    pub sigma: f64,
}

impl ForwardGbm {
    pub fn new(f0: f64, sigma: f64) -> Self {
        ForwardGbm { f0, sigma }
    }

    /// Sampler for the terminal price at horizon `t`, with the drift and
    /// diffusion terms precomputed.
    pub fn terminal_sampler(&self, t: f64) -> TerminalSampler {
        TerminalSampler {
            f0: self.f0,
            drift: -0.5 * self.sigma * self.sigma * t,
            vol_sqrt_t: self.sigma * t.sqrt(),
        }
    }

    pub fn exact_terminal(&self, t: f64, normal_draw: f64) -> f64 {
        self.terminal_sampler(t).sample(normal_draw)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TerminalSampler {
    f0: f64,
    drift: f64,
    vol_sqrt_t: f64,
}

impl TerminalSampler {
    #[inline]
    pub fn sample(&self, normal_draw: f64) -> f64 {
        self.f0 * (self.drift + self.vol_sqrt_t * normal_draw).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_draw_applies_only_convexity_correction() {
        let gbm = ForwardGbm::new(1.2181, 0.25);
        let st = gbm.exact_terminal(0.5, 0.0);
        let expected = 1.2181 * (-0.5 * 0.25 * 0.25 * 0.5f64).exp();
        assert!((st - expected).abs() < 1e-15);
    }

    #[test]
    fn test_terminal_price_is_martingale() {
        // Standard error of the sample mean here is ~0.1
        use crate::rng;
        let gbm = ForwardGbm::new(100.0, 0.3);
        let sampler = gbm.terminal_sampler(2.0);
        let mut r = rng::seed_rng_from_u64(7);
        let n = 200_000;
        let mean: f64 = (0..n)
            .map(|_| sampler.sample(rng::get_normal_draw(&mut r)))
            .sum::<f64>()
            / n as f64;
        assert!((mean - 100.0).abs() < 0.5, "E[F_T] = {}, expected ~100", mean);
    }
}
