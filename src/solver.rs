//! Adaptive Gauss-Kronrod Quadrature
//!
//! Each interval is evaluated with an embedded Gauss/Kronrod pair. The
//! discrepancy between the two estimates decides whether the Kronrod value
//! is accepted or the interval is bisected and both halves are integrated
//! with half the remaining budget.
//!
//! Bisection is uniform (always at the midpoint) but the error test is
//! local, so smooth regions stop early while difficult regions keep
//! splitting until they converge or run out of budget.

use crate::budget::{Budget, Traversal};
use crate::coefficients::{QuadratureRule, GK15};
use crate::error::QuadratureError;

/// Scale applied to the Gauss/Kronrod discrepancy before the acceptance test
const ERROR_SCALE: f64 = 200.0;

/// Exponent applied to the Gauss/Kronrod discrepancy
const ERROR_EXPONENT: f64 = 1.5;

/// Function to integrate: f(x; ctx)
///
/// The context is opaque to the engine. The same `&mut C` is handed to
/// every evaluation, one call at a time and in a deterministic order, so it
/// can accumulate statistics (call counts, timing) without affecting the
/// result.
///
/// Any `Fn(f64, &mut C) -> f64` is an integrand. Closures passed directly
/// need their parameter types spelled out, e.g. `|x: f64, calls: &mut u64|`.
pub trait Integrand<C: ?Sized> {
    /// Evaluate the integrand at `x`
    fn eval(&self, x: f64, ctx: &mut C) -> f64;
}

impl<C: ?Sized, F> Integrand<C> for F
where
    F: Fn(f64, &mut C) -> f64,
{
    fn eval(&self, x: f64, ctx: &mut C) -> f64 {
        self(x, ctx)
    }
}

/// Map a canonical abscissa `z` in [-1, 1] onto [a, b] and evaluate
///
/// Returns `f(x) * (b - a) / 2` where `x = z * (b - a) / 2 + (b + a) / 2`,
/// so a weighted sum of these values over a rule approximates the integral
/// over [a, b] directly. For `b < a` the Jacobian is negative; for `a == b`
/// it is zero.
pub fn map_to_interval<C, F>(f: &F, ctx: &mut C, z: f64, a: f64, b: f64) -> f64
where
    C: ?Sized,
    F: Integrand<C> + ?Sized,
{
    (b - a) / 2.0 * f.eval(z * (b - a) / 2.0 + (b + a) / 2.0, ctx)
}

/// Both rule estimates for a single interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentEstimate {
    /// Lower-order (Gauss) estimate, used only for comparison
    pub gauss: f64,
    /// Higher-order (Kronrod) estimate
    pub kronrod: f64,
    /// 200 * |kronrod - gauss|^1.5
    pub error_indicator: f64,
}

impl SegmentEstimate {
    /// Whether the error indicator is below machine epsilon
    ///
    /// NaN indicators never converge.
    pub fn is_converged(&self) -> bool {
        self.error_indicator < f64::EPSILON
    }

    /// Absolute Gauss/Kronrod discrepancy
    pub fn discrepancy(&self) -> f64 {
        (self.kronrod - self.gauss).abs()
    }
}

/// Apply both rules of `rule` once over [a, b]
///
/// Performs exactly `K` integrand evaluations, in node order; the first `G`
/// are shared with the Gauss rule.
pub fn evaluate_segment<C, F, const G: usize, const K: usize>(
    f: &F,
    ctx: &mut C,
    a: f64,
    b: f64,
    rule: &QuadratureRule<G, K>,
) -> SegmentEstimate
where
    C: ?Sized,
    F: Integrand<C> + ?Sized,
{
    let mut evals = [0.0; K];
    for (eval, &z) in evals.iter_mut().zip(rule.nodes.iter()) {
        *eval = map_to_interval(f, ctx, z, a, b);
    }

    let gauss = evals
        .iter()
        .zip(rule.gauss_weights.iter())
        .fold(0.0, |acc, (e, w)| acc + e * w);
    let kronrod = evals
        .iter()
        .zip(rule.kronrod_weights.iter())
        .fold(0.0, |acc, (e, w)| acc + e * w);

    SegmentEstimate {
        gauss,
        kronrod,
        error_indicator: ERROR_SCALE * (kronrod - gauss).abs().powf(ERROR_EXPONENT),
    }
}

/// Integration statistics for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Total number of integrand evaluations
    pub fn_evals: u64,
    /// Number of single-interval rule applications
    pub segments: u64,
    /// Segments accepted because the error test passed
    pub converged_segments: u64,
    /// Segments accepted only because the budget ran out
    pub saturated_segments: u64,
    /// Number of bisections performed
    pub splits: u64,
    /// Deepest bisection level at which a segment was accepted
    pub max_depth: u32,
}

/// Per-run bookkeeping threaded through the traversal
#[derive(Debug, Default)]
struct Tally {
    stats: Stats,
    error_estimate: f64,
}

impl Tally {
    fn record_segment(&mut self, evals: usize) {
        self.stats.segments += 1;
        self.stats.fn_evals += evals as u64;
    }

    fn record_accept(&mut self, seg: &SegmentEstimate, depth: u32) {
        if seg.is_converged() {
            self.stats.converged_segments += 1;
        } else {
            self.stats.saturated_segments += 1;
        }
        self.stats.max_depth = self.stats.max_depth.max(depth);
        self.error_estimate += seg.discrepancy();
    }
}

/// Adaptive Gauss-Kronrod integration of `f` over [a, b]
///
/// Accepts the Kronrod estimate when the error indicator drops below
/// `f64::EPSILON` or the budget is exhausted; otherwise bisects at the
/// midpoint and returns `left + right`, each half integrated with the
/// halved budget. An unconverged result is returned without any signal;
/// use [`Quadrature`] to observe convergence.
pub fn adaptive_integrate<C, F, const G: usize, const K: usize>(
    f: &F,
    ctx: &mut C,
    a: f64,
    b: f64,
    budget: Budget,
    rule: &QuadratureRule<G, K>,
) -> f64
where
    C: ?Sized,
    F: Integrand<C> + ?Sized,
{
    let mut tally = Tally::default();
    bisect(f, ctx, a, b, budget, rule, 0, &mut tally)
}

#[allow(clippy::too_many_arguments)]
fn bisect<C, F, const G: usize, const K: usize>(
    f: &F,
    ctx: &mut C,
    a: f64,
    b: f64,
    budget: Budget,
    rule: &QuadratureRule<G, K>,
    depth: u32,
    tally: &mut Tally,
) -> f64
where
    C: ?Sized,
    F: Integrand<C> + ?Sized,
{
    let seg = evaluate_segment(f, ctx, a, b, rule);
    tally.record_segment(K);

    if seg.is_converged() || budget.is_exhausted() {
        tally.record_accept(&seg, depth);
        return seg.kronrod;
    }

    tally.stats.splits += 1;
    let m = (a + b) / 2.0;
    let child = budget.halve();
    let left = bisect(f, ctx, a, m, child, rule, depth + 1, tally);
    let right = bisect(f, ctx, m, b, child, rule, depth + 1, tally);
    left + right
}

/// Pending work for the explicit-stack traversal
enum Task {
    Visit {
        a: f64,
        b: f64,
        budget: Budget,
        depth: u32,
    },
    /// Pop the two most recent partial sums and push `left + right`
    Combine,
}

/// Same tree walk as [`bisect`] without call-stack recursion
///
/// The left child is pushed last so its subtree completes first, and
/// `Combine` adds partial sums in `left + right` order, keeping both the
/// evaluation sequence and the rounding identical to the recursive form.
fn bisect_worklist<C, F, const G: usize, const K: usize>(
    f: &F,
    ctx: &mut C,
    a: f64,
    b: f64,
    budget: Budget,
    rule: &QuadratureRule<G, K>,
    tally: &mut Tally,
) -> f64
where
    C: ?Sized,
    F: Integrand<C> + ?Sized,
{
    let mut tasks = vec![Task::Visit {
        a,
        b,
        budget,
        depth: 0,
    }];
    let mut partials: Vec<f64> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit {
                a,
                b,
                budget,
                depth,
            } => {
                let seg = evaluate_segment(f, ctx, a, b, rule);
                tally.record_segment(K);

                if seg.is_converged() || budget.is_exhausted() {
                    tally.record_accept(&seg, depth);
                    partials.push(seg.kronrod);
                    continue;
                }

                tally.stats.splits += 1;
                let m = (a + b) / 2.0;
                let child = budget.halve();
                tasks.push(Task::Combine);
                tasks.push(Task::Visit {
                    a: m,
                    b,
                    budget: child,
                    depth: depth + 1,
                });
                tasks.push(Task::Visit {
                    a,
                    b: m,
                    budget: child,
                    depth: depth + 1,
                });
            }
            Task::Combine => {
                // Both children completed before their Combine was popped
                let right = partials.pop();
                let left = partials.pop();
                match (left, right) {
                    (Some(left), Some(right)) => partials.push(left + right),
                    _ => unreachable!("combine scheduled without two partial sums"),
                }
            }
        }
    }

    debug_assert_eq!(partials.len(), 1);
    partials.pop().unwrap_or(0.0)
}

/// Outcome of a [`Quadrature::integrate`] run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadResult {
    /// Integral estimate (sum of accepted Kronrod estimates)
    pub value: f64,
    /// Sum of |kronrod - gauss| over accepted segments
    pub error_estimate: f64,
    /// Integrand evaluations used by this run
    pub fn_evals: u64,
    /// False if any segment was accepted only because its budget ran out
    pub converged: bool,
}

/// Reusable adaptive quadrature solver
///
/// Holds the rule, the budget and the traversal mode, and accumulates
/// [`Stats`] across runs until [`Quadrature::reset_stats`] is called.
///
/// # Type Parameters
/// * `G` - Number of Gauss points
/// * `K` - Number of Kronrod points
///
/// # Example
/// ```
/// use gkquad::{Budget, Quadrature};
///
/// let mut solver = Quadrature::new().with_budget(Budget::Unlimited);
/// let result = solver.integrate(&|x: f64, _: &mut ()| x.sin(), &mut (), 0.0, std::f64::consts::PI);
///
/// assert!((result.value - 2.0).abs() < 1e-12);
/// assert!(result.converged);
/// ```
#[derive(Debug, Clone)]
pub struct Quadrature<const G: usize = 7, const K: usize = 15> {
    /// Node and weight tables
    rule: QuadratureRule<G, K>,
    /// Subdivision allowance for each run
    budget: Budget,
    /// Tree walk strategy
    traversal: Traversal,
    /// Integration statistics
    pub stats: Stats,
}

impl Quadrature {
    /// G7/K15 solver with the default budget and recursive traversal
    pub fn new() -> Self {
        Self::with_rule(GK15)
    }
}

impl Default for Quadrature {
    fn default() -> Self {
        Self::new()
    }
}

impl<const G: usize, const K: usize> Quadrature<G, K> {
    /// Solver using a caller-supplied embedded rule
    pub fn with_rule(rule: QuadratureRule<G, K>) -> Self {
        Self {
            rule,
            budget: Budget::DEFAULT,
            traversal: Traversal::default(),
            stats: Stats::default(),
        }
    }

    /// Set the recursion budget (negative integers request unlimited)
    pub fn with_budget(mut self, budget: impl Into<Budget>) -> Self {
        self.budget = budget.into();
        self
    }

    /// Set the tree walk strategy
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Current budget
    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Current traversal
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Node and weight tables in use
    pub fn rule(&self) -> &QuadratureRule<G, K> {
        &self.rule
    }

    /// Integrate `f` over [a, b]
    ///
    /// `value` is bit-identical to [`adaptive_integrate`] with the same
    /// budget and rule, whichever traversal is selected.
    pub fn integrate<C, F>(&mut self, f: &F, ctx: &mut C, a: f64, b: f64) -> QuadResult
    where
        C: ?Sized,
        F: Integrand<C> + ?Sized,
    {
        let mut tally = Tally::default();
        let value = match self.traversal {
            Traversal::Recursive => bisect(f, ctx, a, b, self.budget, &self.rule, 0, &mut tally),
            Traversal::WorkList => {
                bisect_worklist(f, ctx, a, b, self.budget, &self.rule, &mut tally)
            }
        };

        let run = tally.stats;
        self.stats.fn_evals += run.fn_evals;
        self.stats.segments += run.segments;
        self.stats.converged_segments += run.converged_segments;
        self.stats.saturated_segments += run.saturated_segments;
        self.stats.splits += run.splits;
        self.stats.max_depth = self.stats.max_depth.max(run.max_depth);

        QuadResult {
            value,
            error_estimate: tally.error_estimate,
            fn_evals: run.fn_evals,
            converged: run.saturated_segments == 0,
        }
    }

    /// Integrate `f` over [a, b], failing on non-finite input or output and
    /// on budget saturation
    pub fn try_integrate<C, F>(
        &mut self,
        f: &F,
        ctx: &mut C,
        a: f64,
        b: f64,
    ) -> Result<f64, QuadratureError>
    where
        C: ?Sized,
        F: Integrand<C> + ?Sized,
    {
        if !a.is_finite() || !b.is_finite() {
            return Err(QuadratureError::NonFiniteBound { a, b });
        }

        let saturated_before = self.stats.saturated_segments;
        let result = self.integrate(f, ctx, a, b);

        if !result.value.is_finite() {
            return Err(QuadratureError::NonFiniteResult {
                value: result.value,
            });
        }
        if !result.converged {
            return Err(QuadratureError::NotConverged {
                value: result.value,
                saturated_segments: self.stats.saturated_segments - saturated_before,
            });
        }
        Ok(result.value)
    }

    /// Reset statistics
    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }
}

/// Integrate `f` over [a, b] with the default budget of 1024
///
/// # Example
/// ```
/// let mut calls = 0u64;
/// let area = gkquad::integrate(
///     |x: f64, calls: &mut u64| {
///         *calls += 1;
///         x * x
///     },
///     &mut calls,
///     0.0,
///     10.0,
/// );
///
/// assert!((area - 1000.0 / 3.0).abs() < 1e-10);
/// assert_eq!(calls, 15);
/// ```
pub fn integrate<C, F>(f: F, ctx: &mut C, a: f64, b: f64) -> f64
where
    C: ?Sized,
    F: Integrand<C>,
{
    integrate_with_budget(f, ctx, a, b, Budget::DEFAULT)
}

/// Integrate `f` over [a, b] with an explicit recursion budget
///
/// `budget` may be a [`Budget`] or an integer: positive caps the depth,
/// zero performs one rule application with no subdivision, negative splits
/// until the error test passes.
pub fn integrate_with_budget<C, F>(
    f: F,
    ctx: &mut C,
    a: f64,
    b: f64,
    budget: impl Into<Budget>,
) -> f64
where
    C: ?Sized,
    F: Integrand<C>,
{
    adaptive_integrate(&f, ctx, a, b, budget.into(), &GK15)
}

/// Integrate a context-free function over [a, b] with the default budget
pub fn quad<F>(f: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    integrate(|x: f64, _: &mut ()| f(x), &mut (), a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::{GAUSS_WEIGHTS, KRONROD_WEIGHTS, NODES};
    use std::f64::consts::PI;

    fn square(x: f64, _: &mut ()) -> f64 {
        x * x
    }

    /// Step at an abscissa no midpoint ever hits, so the segment holding it
    /// never passes the error test
    fn step(x: f64, _: &mut ()) -> f64 {
        if x < 1.0 / 3.0 {
            0.0
        } else {
            1.0
        }
    }

    #[test]
    fn test_map_to_interval_scales_by_jacobian() {
        let f = |x: f64, _: &mut ()| x;
        // z = 0 maps to the midpoint; Jacobian (b - a) / 2
        assert_eq!(map_to_interval(&f, &mut (), 0.0, 2.0, 6.0), 2.0 * 4.0);
        assert_eq!(map_to_interval(&f, &mut (), -1.0, 2.0, 6.0), 2.0 * 2.0);
        assert_eq!(map_to_interval(&f, &mut (), 1.0, 2.0, 6.0), 2.0 * 6.0);
        // Reversed interval: negative Jacobian
        assert_eq!(map_to_interval(&f, &mut (), 0.0, 6.0, 2.0), -2.0 * 4.0);
        // Zero width
        assert_eq!(map_to_interval(&f, &mut (), 0.5, 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_segment_shares_evaluations() {
        let mut calls = 0u32;
        let f = |x: f64, calls: &mut u32| {
            *calls += 1;
            x.exp()
        };
        let seg = evaluate_segment(&f, &mut calls, 0.0, 1.0, &GK15);
        assert_eq!(calls, 15);

        let exact = 1f64.exp() - 1.0;
        assert!((seg.kronrod - exact).abs() < 1e-14);
        assert!((seg.gauss - exact).abs() < 1e-14);
        assert_eq!(
            seg.error_indicator,
            200.0 * (seg.kronrod - seg.gauss).abs().powf(1.5)
        );
    }

    #[test]
    fn test_segment_matches_manual_rule_application() {
        let f = |x: f64, _: &mut ()| (3.0 * x).cos() + x;
        let (a, b) = (-0.5, 2.0);
        let seg = evaluate_segment(&f, &mut (), a, b, &GK15);

        let mut gauss = 0.0;
        let mut kronrod = 0.0;
        for i in 0..15 {
            let x = NODES[i] * (b - a) / 2.0 + (b + a) / 2.0;
            let v = (b - a) / 2.0 * f(x, &mut ());
            if i < 7 {
                gauss += v * GAUSS_WEIGHTS[i];
            }
            kronrod += v * KRONROD_WEIGHTS[i];
        }
        assert_eq!(seg.gauss, gauss);
        assert_eq!(seg.kronrod, kronrod);
    }

    #[test]
    fn test_nan_segment_never_converges() {
        let seg = evaluate_segment(&|_: f64, _: &mut ()| f64::NAN, &mut (), 0.0, 1.0, &GK15);
        assert!(seg.kronrod.is_nan());
        assert!(!seg.is_converged());
    }

    #[test]
    fn test_quadratic_exact_in_one_segment() {
        let mut solver = Quadrature::new().with_budget(Budget::Unlimited);
        let result = solver.integrate(&square, &mut (), 0.0, 10.0);

        let exact = 1000.0 / 3.0;
        assert!(((result.value - exact) / exact).abs() < 1e-10);
        assert!(result.converged);
        assert_eq!(solver.stats.segments, 1);
        assert_eq!(solver.stats.splits, 0);
        assert_eq!(result.fn_evals, 15);
    }

    #[test]
    fn test_budget_caps_depth() {
        let mut solver = Quadrature::new().with_budget(8);
        let result = solver.integrate(&step, &mut (), 0.0, 1.0);

        // 8 -> 4 -> 2 -> 1 -> 0: four splits down the branch holding 1/3,
        // every sibling is constant and converges immediately
        assert_eq!(solver.stats.splits, 4);
        assert_eq!(solver.stats.segments, 9);
        assert_eq!(solver.stats.converged_segments, 4);
        assert_eq!(solver.stats.saturated_segments, 1);
        assert_eq!(solver.stats.max_depth, 4);
        assert_eq!(solver.stats.fn_evals, 9 * 15);
        assert!(!result.converged);
        assert!((result.value - 2.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn test_budget_zero_is_single_segment() {
        let f = |x: f64, _: &mut ()| x.sqrt();
        let raw = adaptive_integrate(&f, &mut (), 0.0, 1.0, Budget::NONE, &GK15);
        let seg = evaluate_segment(&f, &mut (), 0.0, 1.0, &GK15);
        assert_eq!(raw, seg.kronrod);
        assert!(!seg.is_converged());
    }

    #[test]
    fn test_worklist_is_bit_identical() {
        let integrands: [(fn(f64, &mut ()) -> f64, f64, f64); 4] = [
            (|x, _| x.sqrt(), 0.0, 1.0),
            (|x, _| (x.sin() + x).ln(), 1.0, 2.0),
            (|x, _| (1.0 / x).sin(), 0.05, 1.0),
            (step, 0.0, 1.0),
        ];

        for (f, a, b) in integrands {
            for budget in [Budget::Bounded(0), Budget::Bounded(37), Budget::DEFAULT] {
                let mut recursive = Quadrature::new().with_budget(budget);
                let mut worklist = Quadrature::new()
                    .with_budget(budget)
                    .with_traversal(Traversal::WorkList);

                let r = recursive.integrate(&f, &mut (), a, b);
                let w = worklist.integrate(&f, &mut (), a, b);
                assert_eq!(r.value.to_bits(), w.value.to_bits());
                assert_eq!(r.error_estimate.to_bits(), w.error_estimate.to_bits());
                assert_eq!(recursive.stats, worklist.stats);
            }
        }
    }

    #[test]
    fn test_worklist_visits_in_recursive_order() {
        let record = |x: f64, seen: &mut Vec<f64>| {
            seen.push(x);
            x.sqrt()
        };
        let mut seen_recursive = Vec::new();
        let mut seen_worklist = Vec::new();

        Quadrature::new()
            .with_budget(64)
            .integrate(&record, &mut seen_recursive, 0.0, 1.0);
        Quadrature::new()
            .with_budget(64)
            .with_traversal(Traversal::WorkList)
            .integrate(&record, &mut seen_worklist, 0.0, 1.0);

        assert!(seen_recursive.len() > 15);
        assert_eq!(seen_recursive, seen_worklist);
    }

    #[test]
    fn test_quadrature_matches_raw_entry_point() {
        let f = |x: f64, _: &mut ()| (x * x).sin();
        for budget in [0, 1, 5, 1024, -1] {
            let raw = integrate_with_budget(f, &mut (), 0.0, 3.0, budget);
            let result = Quadrature::new().with_budget(budget).integrate(&f, &mut (), 0.0, 3.0);
            assert_eq!(raw.to_bits(), result.value.to_bits(), "budget {}", budget);
        }
    }

    #[test]
    fn test_stats_accumulate_until_reset() {
        let mut solver = Quadrature::new();
        solver.integrate(&square, &mut (), 0.0, 1.0);
        solver.integrate(&square, &mut (), 0.0, 2.0);
        assert_eq!(solver.stats.fn_evals, 30);
        assert_eq!(solver.stats.segments, 2);

        solver.reset_stats();
        assert_eq!(solver.stats, Stats::default());
    }

    #[test]
    fn test_try_integrate_rejects_non_finite_bounds() {
        let mut solver = Quadrature::new();
        let err = solver.try_integrate(&square, &mut (), f64::NAN, 1.0).unwrap_err();
        assert!(matches!(err, QuadratureError::NonFiniteBound { .. }));

        let err = solver
            .try_integrate(&square, &mut (), 0.0, f64::INFINITY)
            .unwrap_err();
        assert!(matches!(err, QuadratureError::NonFiniteBound { .. }));
        assert_eq!(solver.stats.fn_evals, 0);
    }

    #[test]
    fn test_try_integrate_reports_saturation() {
        let mut solver = Quadrature::new().with_budget(8);
        match solver.try_integrate(&step, &mut (), 0.0, 1.0) {
            Err(QuadratureError::NotConverged {
                value,
                saturated_segments,
            }) => {
                assert_eq!(saturated_segments, 1);
                assert!((value - 2.0 / 3.0).abs() < 0.01);
            }
            other => panic!("expected NotConverged, got {:?}", other),
        }
    }

    #[test]
    fn test_try_integrate_reports_non_finite_result() {
        let mut solver = Quadrature::new().with_budget(0);
        let err = solver
            .try_integrate(&|_: f64, _: &mut ()| f64::NAN, &mut (), 0.0, 1.0)
            .unwrap_err();
        assert!(matches!(err, QuadratureError::NonFiniteResult { .. }));
    }

    #[test]
    fn test_try_integrate_success() {
        let mut solver = Quadrature::new().with_budget(-1);
        let value = solver
            .try_integrate(&|x: f64, _: &mut ()| x.sin() * x.sin(), &mut (), 0.0, PI)
            .unwrap();
        assert!((value - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_quad_without_context() {
        let value = quad(|x| x.cos(), 0.0, PI / 2.0);
        assert!((value - 1.0).abs() < 1e-14);
    }
}
