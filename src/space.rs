//! Search space: points, box bounds and bound handling.

use crate::error::{Result, SearchError};
use rand::Rng;

/// A point in the search space, one coordinate per dimension.
pub type Point = Vec<f64>;

/// Axis-aligned box bounds, one `(lower, upper)` pair per dimension.
///
/// Always non-empty, finite, and `lower <= upper` in every dimension,
/// with a finite width `upper - lower`.
/// A pair with `lower == upper` pins that coordinate to a constant.
///
/// # Examples
///
/// ```
/// use u_localsearch::space::Bounds;
///
/// let bounds = Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)]).unwrap();
/// assert_eq!(bounds.dim(), 2);
/// assert!(bounds.contains(&[0.0, 5.0]));
/// assert!(!bounds.contains(&[0.0, 5.1]));
/// assert!(Bounds::new(vec![(1.0, 0.0)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")
)]
pub struct Bounds {
    pairs: Vec<(f64, f64)>,
}

impl Bounds {
    /// Validates and wraps the given `(lower, upper)` pairs.
    pub fn new(pairs: Vec<(f64, f64)>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(SearchError::InvalidBounds(
                "at least one dimension is required".into(),
            ));
        }
        for (i, &(lower, upper)) in pairs.iter().enumerate() {
            if !lower.is_finite() || !upper.is_finite() {
                return Err(SearchError::InvalidBounds(format!(
                    "non-finite bound ({lower}, {upper}) in dimension {i}"
                )));
            }
            if lower > upper {
                return Err(SearchError::InvalidBounds(format!(
                    "lower {lower} > upper {upper} in dimension {i}"
                )));
            }
            if !(upper - lower).is_finite() {
                return Err(SearchError::InvalidBounds(format!(
                    "width of ({lower}, {upper}) in dimension {i} overflows"
                )));
            }
        }
        Ok(Self { pairs })
    }

    /// Same box in every one of `dim` dimensions.
    pub fn uniform(dim: usize, lower: f64, upper: f64) -> Result<Self> {
        Self::new(vec![(lower, upper); dim])
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.pairs.len()
    }

    /// The `(lower, upper)` pairs in dimension order.
    pub fn pairs(&self) -> &[(f64, f64)] {
        &self.pairs
    }

    /// Draws a point uniformly from the box, one coordinate at a time.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        self.pairs
            .iter()
            .map(|&(lower, upper)| rng.random_range(lower..=upper))
            .collect()
    }

    /// Whether every coordinate lies within its bound pair (inclusive).
    ///
    /// A point of the wrong length is never contained.
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.pairs.len()
            && self
                .pairs
                .iter()
                .zip(point)
                .all(|(&(lower, upper), &x)| lower <= x && x <= upper)
    }

    /// Clamps every coordinate into its bound pair.
    pub fn project(&self, point: &[f64]) -> Point {
        self.pairs
            .iter()
            .zip(point)
            .map(|(&(lower, upper), &x)| x.clamp(lower, upper))
            .collect()
    }

    /// Checks that `point` is a valid start: right arity and inside the box.
    pub fn check_start(&self, point: &[f64]) -> Result<()> {
        if point.len() != self.dim() {
            return Err(SearchError::InvalidBounds(format!(
                "start point has {} coordinates, bounds have {}",
                point.len(),
                self.dim()
            )));
        }
        if !self.contains(point) {
            return Err(SearchError::InvalidBounds(format!(
                "start point {point:?} lies outside the bounds"
            )));
        }
        Ok(())
    }
}

impl TryFrom<Vec<(f64, f64)>> for Bounds {
    type Error = SearchError;

    fn try_from(pairs: Vec<(f64, f64)>) -> Result<Self> {
        Self::new(pairs)
    }
}

impl From<Bounds> for Vec<(f64, f64)> {
    fn from(bounds: Bounds) -> Self {
        bounds.pairs
    }
}

/// What happens to candidates that step outside the bounds.
///
/// Only the initial point is guaranteed to be inside the box; the
/// stochastic searches may wander beyond it unless told to clamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundPolicy {
    /// Candidates are evaluated wherever they land.
    #[default]
    Unconstrained,

    /// Candidates are clamped back into the box before evaluation.
    Clamp,
}

impl BoundPolicy {
    /// Applies the policy to a freshly generated candidate.
    pub fn apply(self, bounds: &Bounds, candidate: Point) -> Point {
        match self {
            BoundPolicy::Unconstrained => candidate,
            BoundPolicy::Clamp => bounds.project(&candidate),
        }
    }
}

/// Offsets every coordinate by an independent draw from
/// `[-step_size, step_size]`, in coordinate order.
pub(crate) fn perturb<R: Rng>(point: &[f64], step_size: f64, rng: &mut R) -> Point {
    point
        .iter()
        .map(|&x| x + rng.random_range(-step_size..=step_size))
        .collect()
}
