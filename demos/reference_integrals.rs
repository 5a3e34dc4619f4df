//! Reference integrals with known closed forms.
//!
//! Prints the exact value, the computed value and the percent error for a
//! handful of integrands.
//!
//! Run with:
//!   cargo run --example reference_integrals

use gkquad::integrate;
use std::f64::consts::PI;

/// Normal density parameters passed through the integrand context
struct Normal {
    mu: f64,
    sigma: f64,
}

fn percent_error(actual: f64, calculated: f64) -> f64 {
    (100.0 * (actual - calculated) / actual).abs()
}

fn report<C>(description: &str, f: fn(f64, &mut C) -> f64, ctx: &mut C, a: f64, b: f64, actual: f64) {
    let calculated = integrate(f, ctx, a, b);

    println!("Testing {description}");
    println!("  for x in [{a:e}, {b:e}]");
    println!("  Actual:     {actual:.15e}");
    println!("  Calculated: {calculated:.15e}");
    println!("  %Error:     {:.15e}", percent_error(actual, calculated));
    println!();
}

fn main() {
    report("f(x) = 1", |_, _: &mut ()| 1.0, &mut (), 0.0, 10.0, 10.0);
    report("f(x) = x^2", |x, _: &mut ()| x * x, &mut (), 0.0, 10.0, 1000.0 / 3.0);
    report("f(x) = sin^2(x)", |x, _: &mut ()| x.sin() * x.sin(), &mut (), 0.0, PI, PI / 2.0);
    report(
        "f(x) = log(x + sin(x))",
        |x, _: &mut ()| (x.sin() + x).ln(),
        &mut (),
        1.0,
        2.0,
        0.890373044577735,
    );

    let mut normal = Normal { mu: 1.0, sigma: 1.0 };
    report(
        "f(x) = N(1, 1) density",
        |x, p: &mut Normal| {
            let z = (x - p.mu) / p.sigma;
            (-0.5 * z * z).exp() / (p.sigma * (2.0 * PI).sqrt())
        },
        &mut normal,
        0.0,
        2.0,
        0.682_689_492_137_085_9,
    );
}
