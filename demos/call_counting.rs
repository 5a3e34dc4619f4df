//! Counting integrand calls through the context.
//!
//! The engine forwards the same context to every evaluation, so the caller
//! can observe how much work each recursion budget costs.
//!
//! Run with:
//!   cargo run --example call_counting

use gkquad::{Budget, Quadrature};

fn main() {
    let exact = 2.0 / 3.0;
    let f = |x: f64, calls: &mut u64| {
        *calls += 1;
        x.sqrt()
    };

    println!("Integrating sqrt(x) over [0, 1] (exact: {exact:.15})");
    println!();
    println!("  {:>10}  {:>8}  {:>6}  {:>10}  converged", "budget", "calls", "depth", "error");

    for budget in [
        Budget::Bounded(0),
        Budget::Bounded(1),
        Budget::Bounded(16),
        Budget::DEFAULT,
        Budget::Unlimited,
    ] {
        let mut calls = 0u64;
        let mut solver = Quadrature::new().with_budget(budget);
        let result = solver.integrate(&f, &mut calls, 0.0, 1.0);

        println!(
            "  {:>10}  {:>8}  {:>6}  {:>10.2e}  {}",
            budget.to_string(),
            calls,
            solver.stats.max_depth,
            (result.value - exact).abs(),
            result.converged
        );
    }
}
