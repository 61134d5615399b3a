//! Elementwise column arithmetic with missing-value propagation.

use super::Cell;

/// `a[i] - b[i]` for every row.
pub fn sub(a: &[Cell], b: &[Cell]) -> Vec<Cell> {
    zip_with(a, b, |x, y| x - y)
}

/// `a[i] / b[i]` for every row.
///
/// Division by zero is not special-cased: `x / 0.0` is `±inf` and `0.0 / 0.0`
/// is `NaN`, both kept as present values.
pub fn div(a: &[Cell], b: &[Cell]) -> Vec<Cell> {
    zip_with(a, b, |x, y| x / y)
}

fn zip_with(a: &[Cell], b: &[Cell], f: impl Fn(f64, f64) -> f64) -> Vec<Cell> {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(f(*x, *y)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_operand_poisons_result() {
        let a = [Some(1.0), None, Some(2.0), None];
        let b = [Some(0.5), Some(1.0), None, None];
        assert_eq!(sub(&a, &b), vec![Some(0.5), None, None, None]);
        assert_eq!(div(&a, &b), vec![Some(2.0), None, None, None]);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let out = div(&[Some(1.0), Some(-1.0), Some(0.0)], &[Some(0.0), Some(0.0), Some(0.0)]);
        assert_eq!(out[0], Some(f64::INFINITY));
        assert_eq!(out[1], Some(f64::NEG_INFINITY));
        assert!(out[2].is_some_and(f64::is_nan));
    }
}
