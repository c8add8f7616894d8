// tests/pricing_properties_test.rs
use futures_carry::analytics::black76::{black76_call, price_futures_call};
use futures_carry::analytics::cost_of_carry::futures_price;
use futures_carry::models::MarketParameters;

/// Grid of valid scenarios spanning contango, backwardation, negative rates,
/// deep ITM/OTM strikes and short/long maturities.
fn scenario_grid() -> Vec<MarketParameters> {
    let mut grid = Vec::new();
    for &spot in &[0.5, 1.20, 95.0, 4200.0] {
        for &(rate, storage, conv) in &[(0.02, 0.01, 0.0), (-0.005, 0.0, 0.04), (0.08, 0.03, 0.15)] {
            for &maturity in &[0.01, 0.5, 3.0] {
                for &moneyness in &[0.5, 0.95, 1.0, 1.1, 2.0] {
                    for &vol in &[0.05, 0.25, 0.9] {
                        grid.push(MarketParameters::new(
                            spot,
                            rate,
                            storage,
                            conv,
                            maturity,
                            spot * moneyness,
                            vol,
                        ));
                    }
                }
            }
        }
    }
    grid
}

#[test]
fn test_futures_price_closed_form() {
    for p in scenario_grid() {
        let f = futures_price(&p).expect("Valid scenario");
        let expected = p.spot * ((p.rate + p.storage_cost - p.convenience_yield) * p.maturity).exp();
        assert_eq!(f, expected, "{:?}", p);
    }
}

#[test]
fn test_d2_is_d1_minus_vol_sqrt_t() {
    for p in scenario_grid() {
        let res = price_futures_call(&p).expect("Valid scenario");
        assert_eq!(res.d2, res.d1 - p.volatility * p.maturity.sqrt(), "{:?}", p);
    }
}

#[test]
fn test_no_arbitrage_bounds() {
    for p in scenario_grid() {
        let res = price_futures_call(&p).expect("Valid scenario");
        let df = p.discount_factor();
        let lower = (df * (res.futures_price - p.strike)).max(0.0);
        let upper = res.futures_price * df;
        let tol = 1e-12 * res.futures_price.max(p.strike);

        assert!(
            res.call_price >= lower - tol,
            "call {} below lower bound {} for {:?}",
            res.call_price,
            lower,
            p
        );
        assert!(
            res.call_price <= upper + tol,
            "call {} above upper bound {} for {:?}",
            res.call_price,
            upper,
            p
        );
    }
}

#[test]
fn test_closed_form_is_bit_identical_on_repeat() {
    for p in scenario_grid().into_iter().step_by(7) {
        let a = price_futures_call(&p).expect("Valid scenario");
        let b = price_futures_call(&p).expect("Valid scenario");
        assert_eq!(a.call_price.to_bits(), b.call_price.to_bits());
        assert_eq!(a.d1.to_bits(), b.d1.to_bits());
        assert_eq!(a.interpretation, b.interpretation);
    }
}

#[test]
fn test_call_increases_with_forward() {
    let base = MarketParameters::new(100.0, 0.03, 0.0, 0.0, 1.0, 100.0, 0.2);
    let mut last = 0.0;
    for f in [80.0, 90.0, 100.0, 110.0, 120.0] {
        let price = black76_call(&base, f).expect("Valid scenario").call_price;
        assert!(price > last, "call not increasing at F = {}", f);
        last = price;
    }
}

#[test]
fn test_at_the_money_matches_known_value() {
    // F = X = 100, σ = 0.2, T = 1, r = 0.05: C = e^-0.05 * 100 * (2Φ(0.1) - 1)
    let params = MarketParameters::new(100.0, 0.05, 0.0, 0.0, 1.0, 100.0, 0.2);
    let res = black76_call(&params, 100.0).expect("Valid scenario");
    let expected = 7.577_082_146_4;
    assert!((res.call_price - expected).abs() < 1e-8, "ATM call = {}", res.call_price);
}
