/// Real roots of `a·t² + b·t + c = 0`, sorted ascending.
///
/// Falls back to the linear root when `a == 0` and returns no roots when
/// both `a` and `b` are zero or the discriminant is negative. A double root
/// is reported once.
#[must_use]
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
pub fn solve_quadratic_real(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a == 0.0 {
        if b == 0.0 {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Vec::new();
    }
    if disc == 0.0 {
        return vec![-b / (2.0 * a)];
    }

    let sq = disc.sqrt();
    let mut roots = vec![(-b - sq) / (2.0 * a), (-b + sq) / (2.0 * a)];
    roots.sort_by(f64::total_cmp);
    roots
}
