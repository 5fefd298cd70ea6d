//! Objective functions.

/// A scalar function to minimize.
///
/// Implemented for every `Fn(&[f64]) -> f64`, so plain closures and
/// function items can be passed directly:
///
/// ```
/// use u_localsearch::objective::{sphere, Objective};
///
/// assert_eq!(sphere.evaluate(&[3.0, 4.0]), 25.0);
/// let shifted = |x: &[f64]| (x[0] - 1.0).powi(2);
/// assert_eq!(shifted.evaluate(&[1.0]), 0.0);
/// ```
///
/// The searches assume the function is pure. Values are not checked:
/// NaN and infinities take part in comparisons as IEEE 754 defines.
pub trait Objective {
    /// Evaluates the function at `point`. Lower is better.
    fn evaluate(&self, point: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, point: &[f64]) -> f64 {
        self(point)
    }
}

/// Sphere function `sum(x_i^2)`. Convex, unimodal, minimum 0 at the origin.
pub fn sphere(point: &[f64]) -> f64 {
    point.iter().map(|x| x * x).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere() {
        assert_eq!(sphere(&[0.0, 0.0]), 0.0);
        assert_eq!(sphere(&[3.0, 4.0]), 25.0);
        assert_eq!(sphere(&[-1.0, 2.0, -2.0]), 9.0);
    }

    #[test]
    fn test_closure_objective() {
        let offset = 2.0;
        let f = move |x: &[f64]| x.iter().map(|v| (v - offset).abs()).sum::<f64>();
        assert_eq!(f.evaluate(&[2.0, 3.0]), 1.0);
    }
}
