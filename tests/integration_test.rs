// tests/integration_test.rs
use futures_carry::analytics::black76;
use futures_carry::analytics::cost_of_carry;
use futures_carry::mc::mc_engine::{mc_price_futures_call, monte_carlo_call_price, SimulationConfig};
use futures_carry::models::MarketParameters;
use futures_carry::rng;
use futures_carry::{ExerciseOutlook, PricingError};

fn scenario_a() -> MarketParameters {
    MarketParameters::new(1.20, 0.02, 0.01, 0.0, 0.5, 1.25, 0.25)
}

fn scenario_b() -> MarketParameters {
    MarketParameters::new(1.15, 0.03, 0.01, 0.0, 0.5, 1.20, 0.25)
}

#[test]
fn test_mc_converges_to_black76() {
    let params = scenario_a();
    let analytic = black76::price_futures_call(&params).expect("Valid scenario");

    let cfg = SimulationConfig {
        num_samples: 1_000_000,
        seed: Some(42),
        ..Default::default()
    };
    let mc = mc_price_futures_call(&params, &cfg).expect("Valid scenario");

    let abs_error = (mc.price - analytic.call_price).abs();

    println!("\nMC Price: {}", mc.price);
    println!("MC Std Error: {:?}", mc.std_error);
    println!("Analytic Price: {}", analytic.call_price);
    println!("Absolute Error: {}", abs_error);

    assert!(abs_error < 0.01, "Absolute error exceeds 0.01: {}", abs_error);
    assert!(abs_error < 0.002, "Absolute error unexpectedly large for 1M samples: {}", abs_error);
}

#[test]
fn test_caller_generator_converges_to_black76() {
    let params = scenario_b();
    let forward = cost_of_carry::futures_price(&params).expect("Valid scenario");
    let analytic = black76::price_futures_call(&params).expect("Valid scenario");

    let mut generator = rng::seed_rng_from_u64(2024);
    let direct = monte_carlo_call_price(
        forward,
        params.rate,
        params.maturity,
        params.strike,
        params.volatility,
        200_000,
        &mut generator,
    )
    .expect("Valid scenario");

    let se = direct.std_error.expect("many samples");
    println!("\nDirect MC: {} ± {} vs analytic {}", direct.price, se, analytic.call_price);
    assert!((direct.price - analytic.call_price).abs() < 5.0 * se);
}

#[test]
fn test_scenario_b_report() {
    let res = black76::price_futures_call(&scenario_b()).expect("Valid scenario");

    assert!((res.futures_price - 1.1732).abs() < 1e-4);
    assert!((res.d1 - -0.0392).abs() < 1e-4);
    assert_eq!(format!("{:.2}", res.d2), "-0.22");
    assert!((res.call_price - 0.0698).abs() < 1e-4);
    assert_eq!(res.outlook, ExerciseOutlook::LikelyOutOfMoney);
    assert!(res.interpretation.contains("1.2"));
    assert!(res.interpretation.contains("less likely to end in profit"));
}

#[test]
fn test_invalid_inputs_fail_before_pricing() {
    let zero_spot = MarketParameters { spot: 0.0, ..scenario_a() };
    let zero_sigma = MarketParameters { volatility: 0.0, ..scenario_a() };
    let zero_t = MarketParameters { maturity: 0.0, ..scenario_a() };

    for (name, params) in [("spot", zero_spot), ("volatility", zero_sigma), ("maturity", zero_t)] {
        match black76::price_futures_call(&params) {
            Err(PricingError::InvalidInput { parameter, .. }) => assert_eq!(parameter, name),
            other => panic!("{}: expected InvalidInput, got {:?}", name, other),
        }
        let cfg = SimulationConfig { num_samples: 100, seed: Some(1), ..Default::default() };
        assert!(matches!(
            mc_price_futures_call(&params, &cfg),
            Err(PricingError::InvalidInput { .. })
        ));
    }

    assert!(matches!(
        cost_of_carry::cost_of_carry_price(0.0, 0.02, 0.01, 0.0, 0.5),
        Err(PricingError::InvalidInput { .. })
    ));
}
