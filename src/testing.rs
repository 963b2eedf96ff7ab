pub fn isclose<T: Into<f64>>(a: T, b: T, rtol: f64, atol: f64) -> bool {
    let (a, b) = (a.into(), b.into());
    (a - b).abs() <= a.abs().max(b.abs()) * rtol + atol
}

pub fn allclose<T: Into<f64> + Copy>(
    a: &[T],
    b: &[T],
    rtol: f64,
    atol: f64,
) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(a, b)| isclose(*a, *b, rtol, atol))
}
