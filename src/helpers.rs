pub fn modulus(a: f64, b: f64) -> f64 {
    ((a % b) + b) % b
}

#[cfg(test)]
pub fn assert_almost_eq(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "expected {a} ~= {b} (diff {})", (a - b).abs());
}

#[cfg(test)]
mod tests {
    use super::modulus;

    #[test]
    fn test_modulus_wraps_negative() {
        assert_eq!(modulus(-90., 360.), 270.);
        assert_eq!(modulus(725., 360.), 5.);
    }
}
