//! Gauss-Kronrod 7(15) Nodes and Weights
//!
//! The 7-point Gauss-Legendre rule embedded in the 15-point Kronrod
//! extension, both on the canonical interval [-1, 1].
//!
//! The Kronrod rule reuses every Gauss abscissa and adds eight more, so a
//! single set of 15 function evaluations produces both estimates. The
//! difference between the two drives the adaptive error test.
//!
//! Reference: Kronrod, A.S. (1965). "Nodes and Weights of Quadrature
//! Formulas". Consultants Bureau; Piessens et al. (1983). "QUADPACK".

/// Number of points in the embedded Gauss rule
pub const GAUSS_POINTS: usize = 7;

/// Number of points in the Kronrod rule
pub const KRONROD_POINTS: usize = 15;

/// Degree of polynomial integrated exactly by the Gauss rule (2n - 1)
pub const GAUSS_DEGREE: u8 = 13;

/// Degree of polynomial integrated exactly by the Kronrod rule (3n + 1)
pub const KRONROD_DEGREE: u8 = 22;

/// Evaluation abscissas on [-1, 1]
///
/// Ordering matters: `NODES[0..GAUSS_POINTS]` are exactly the Gauss
/// abscissas (center, then ± pairs of increasing magnitude), followed by
/// the Kronrod-only abscissas in the same ± pattern.
#[allow(clippy::excessive_precision)]
pub const NODES: [f64; KRONROD_POINTS] = [
    0.0000000000000000000000000,
    0.4058451513773971669066064,
    -0.4058451513773971669066064,
    0.7415311855993944398638648,
    -0.7415311855993944398638648,
    0.9491079123427585245261897,
    -0.9491079123427585245261897,
    // Kronrod-only abscissas
    0.2077849550078984676006894,
    -0.2077849550078984676006894,
    0.5860872354676911302941448,
    -0.5860872354676911302941448,
    0.8648644233597690727897128,
    -0.8648644233597690727897128,
    0.9914553711208126392068547,
    -0.9914553711208126392068547,
];

/// Gauss weights, aligned with `NODES[0..GAUSS_POINTS]`
#[allow(clippy::excessive_precision)]
pub const GAUSS_WEIGHTS: [f64; GAUSS_POINTS] = [
    0.4179591836734693877551020,
    0.3818300505051189449503698,
    0.3818300505051189449503698,
    0.2797053914892766679014678,
    0.2797053914892766679014678,
    0.1294849661688696932706114,
    0.1294849661688696932706114,
];

/// Kronrod weights, aligned with `NODES`
#[allow(clippy::excessive_precision)]
pub const KRONROD_WEIGHTS: [f64; KRONROD_POINTS] = [
    0.2094821410847278280129992,
    0.1903505780647854099132564,
    0.1903505780647854099132564,
    0.1406532597155259187451896,
    0.1406532597155259187451896,
    0.0630920926299785532907007,
    0.0630920926299785532907007,
    0.2044329400752988924141620,
    0.2044329400752988924141620,
    0.1690047266392679028265834,
    0.1690047266392679028265834,
    0.1047900103222501838398763,
    0.1047900103222501838398763,
    0.0229353220105292249637320,
    0.0229353220105292249637320,
];

/// An embedded (nested) Gauss/Kronrod quadrature pair on [-1, 1]
///
/// # Type Parameters
/// * `G` - Number of Gauss points
/// * `K` - Number of Kronrod points (the evaluation buffer length)
///
/// The first `G` entries of `nodes` must be the Gauss abscissas so that one
/// set of `K` evaluations serves both rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureRule<const G: usize, const K: usize> {
    /// Evaluation abscissas (Gauss abscissas first)
    pub nodes: [f64; K],
    /// Weights of the lower-order rule
    pub gauss_weights: [f64; G],
    /// Weights of the higher-order rule
    pub kronrod_weights: [f64; K],
}

impl<const G: usize, const K: usize> QuadratureRule<G, K> {
    /// Build a rule from its tables. Panics (at compile time in const
    /// contexts) if the Gauss rule has more points than the Kronrod rule.
    pub const fn new(nodes: [f64; K], gauss_weights: [f64; G], kronrod_weights: [f64; K]) -> Self {
        assert!(G <= K, "Gauss rule cannot have more points than its Kronrod extension");
        Self {
            nodes,
            gauss_weights,
            kronrod_weights,
        }
    }

    /// Number of Gauss points
    pub const fn gauss_points(&self) -> usize {
        G
    }

    /// Number of Kronrod points
    pub const fn kronrod_points(&self) -> usize {
        K
    }

    /// The abscissas shared with the Gauss rule
    pub fn gauss_nodes(&self) -> &[f64] {
        &self.nodes[..G]
    }
}

/// The standard G7/K15 pair
pub const GK15: QuadratureRule<GAUSS_POINTS, KRONROD_POINTS> =
    QuadratureRule::new(NODES, GAUSS_WEIGHTS, KRONROD_WEIGHTS);
