//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult, MIN_DERIVATIVE};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// Converges quadratically near a simple root but requires the derivative
/// and can fail outright near stationary points; callers that need a
/// guaranteed answer should fall back to [`bisection`](super::bisection)
/// on error.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// * [`MathError::DerivativeTooSmall`] if `|f'(x)|` drops below 1e-10
/// * [`MathError::NotConverged`] if the iteration budget is exhausted
///
/// # Example
///
/// ```rust
/// use oxbow_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find the cube root of 27
/// let f = |x: f64| x * x * x - 27.0;
/// let df = |x: f64| 3.0 * x * x;
///
/// let result = newton_raphson(f, df, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 3.0).abs() < 1e-8);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);

        if dfx.abs() < MIN_DERIVATIVE {
            return Err(MathError::DerivativeTooSmall {
                x,
                derivative: dfx,
            });
        }

        let step = fx / dfx;
        x -= step;

        if step.abs() < config.tolerance {
            let final_fx = f(x);
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: final_fx,
            });
        }
    }

    Err(MathError::not_converged(
        config.max_iterations,
        f(x).abs(),
    ))
}
