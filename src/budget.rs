//! Recursion budget for adaptive bisection.
//!
//! A budget of `n` lets the current call split once more and hands each
//! half `n / 2`. Halving rather than decrementing bounds the tree depth
//! logarithmically: a starting budget `B >= 1` allows at most
//! `floor(log2(B)) + 1` levels of bisection.

/// Remaining subdivision allowance for one interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Budget {
    /// Split until the error test passes, with no depth cap.
    ///
    /// Unlimited mode is persistent: both halves inherit it. On an integrand
    /// whose error never shrinks the recursive traversal can exhaust the
    /// stack.
    Unlimited,
    /// Split while the allowance is non-zero; `Bounded(0)` accepts the
    /// current estimate as is.
    Bounded(u32),
}

impl Budget {
    /// Budget used by [`crate::integrate`]: ten halvings below 1024.
    pub const DEFAULT: Budget = Budget::Bounded(1024);

    /// No subdivision: a single rule application over the whole interval.
    pub const NONE: Budget = Budget::Bounded(0);

    /// Whether the current interval must be accepted without splitting
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Budget::Bounded(0))
    }

    /// Whether this budget is the persistent unlimited mode
    pub const fn is_unlimited(self) -> bool {
        matches!(self, Budget::Unlimited)
    }

    /// Budget handed to each half after a split
    pub const fn halve(self) -> Budget {
        match self {
            Budget::Unlimited => Budget::Unlimited,
            Budget::Bounded(n) => Budget::Bounded(n / 2),
        }
    }

    /// Deepest split level reachable from this budget, `None` if unlimited
    pub fn max_depth(self) -> Option<u32> {
        match self {
            Budget::Unlimited => None,
            Budget::Bounded(0) => Some(0),
            Budget::Bounded(n) => Some(n.ilog2() + 1),
        }
    }
}

impl Default for Budget {
    fn default() -> Self {
        Budget::DEFAULT
    }
}

impl From<u32> for Budget {
    fn from(n: u32) -> Self {
        Budget::Bounded(n)
    }
}

impl From<usize> for Budget {
    fn from(n: usize) -> Self {
        Budget::Bounded(u32::try_from(n).unwrap_or(u32::MAX))
    }
}

/// Negative values request unlimited mode.
impl From<i32> for Budget {
    fn from(n: i32) -> Self {
        if n < 0 {
            Budget::Unlimited
        } else {
            Budget::Bounded(n.unsigned_abs())
        }
    }
}

/// Negative values request unlimited mode; values past `u32::MAX` saturate.
impl From<i64> for Budget {
    fn from(n: i64) -> Self {
        if n < 0 {
            Budget::Unlimited
        } else {
            Budget::Bounded(u32::try_from(n).unwrap_or(u32::MAX))
        }
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Budget::Unlimited => write!(f, "unlimited"),
            Budget::Bounded(n) => write!(f, "{}", n),
        }
    }
}

/// How the split tree is walked
///
/// Both traversals visit intervals in the same order (left half fully
/// before right half) and combine sums in the same order, so they return
/// bit-identical results and call the integrand in the same sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traversal {
    /// Ordinary call-stack recursion
    #[default]
    Recursive,
    /// Explicit heap-allocated work list; depth is not limited by the
    /// thread's stack size
    WorkList,
}
