//! property tests shared by the solvers
use numeric_roots::root_finding::bisection::{bisection_observed, BisectionCfg, BisectionError};
use numeric_roots::root_finding::event::Event;
use numeric_roots::root_finding::newton::{newton_observed, NewtonCfg};
use numeric_roots::root_finding::regula_falsi::{regula_falsi_observed, RegulaFalsiCfg};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bisection_width_halves(a in -10.0..10.0f64, width in 0.5..10.0f64, t in 0.01..0.99f64) {
        let b  = a + width;
        let c  = a + t * (b - a);
        let w0 = b - a;
        let cfg = BisectionCfg::new()
            .set_tolerance(1e-12).unwrap()
            .set_max_iter(20).unwrap();

        let res = bisection_observed(|x| x - c, a, b, cfg, &mut ()).unwrap();

        prop_assert_eq!(res.errors.len(), res.iterations);
        prop_assert!(res.iterations <= 20);
        for (i, &e) in res.errors.iter().enumerate() {
            let expected = w0 / 2.0_f64.powi(i as i32 + 1);
            prop_assert!((e - expected).abs() <= 1e-12, "iter {}: {} vs {}", i + 1, e, expected);
        }
    }

    #[test]
    fn same_sign_endpoints_never_iterate(a in -5.0..5.0f64, b in -5.0..5.0f64, k in 0.1..10.0f64) {
        let f = |x: f64| x * x + k;
        let mut iterations = 0;
        let mut count = |e: &Event<'_>| if let Event::Iteration { .. } = e { iterations += 1 };

        let bis = bisection_observed(f, a, b, BisectionCfg::new(), &mut count);
        let rf  = regula_falsi_observed(f, a, b, RegulaFalsiCfg::new(), &mut count);

        prop_assert!(matches!(bis, Err(BisectionError::InvalidBracket { .. })), "{:?}", bis);
        prop_assert!(rf.is_err());
        prop_assert_eq!(iterations, 0);
    }

    #[test]
    fn newton_errors_bounded_by_max_iter(seed in 0.1..10.0f64, max_iter in 1usize..8) {
        let cfg = NewtonCfg::new().set_max_iter(max_iter).unwrap();
        let res = newton_observed(|x| x * x - 2.0, |x| 2.0 * x, seed, cfg, &mut ()).unwrap();

        prop_assert_eq!(res.errors.len(), res.iterations);
        prop_assert!(res.iterations <= max_iter);
    }
}
