//! Small fixed-size vector helpers on `[f64; 3]`.

pub type Point = [f64; 3];

#[inline]
pub fn sub(a: Point, b: Point) -> Point {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn add(a: Point, b: Point) -> Point {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn scale(a: Point, s: f64) -> Point {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
pub fn dot(a: Point, b: Point) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: Point, b: Point) -> Point {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn norm(a: Point) -> f64 {
    dot(a, a).sqrt()
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    norm(sub(a, b))
}

pub fn midpoint(a: Point, b: Point) -> Point {
    scale(add(a, b), 0.5)
}

/// Arithmetic mean of a non-empty point set (origin for an empty one).
pub fn mean(points: &[Point]) -> Point {
    if points.is_empty() {
        return [0.0; 3];
    }
    let sum = points.iter().fold([0.0; 3], |acc, &p| add(acc, p));
    scale(sum, 1.0 / points.len() as f64)
}

/// Signed area of triangle `(a, b, c)` projected on the XY plane.
pub fn signed_area_xy(a: Point, b: Point, c: Point) -> f64 {
    let abx = b[0] - a[0];
    let aby = b[1] - a[1];
    let acx = c[0] - a[0];
    let acy = c[1] - a[1];
    0.5 * (abx * acy - aby * acx)
}

/// Signed volume of tetrahedron `(a, b, c, d)`.
pub fn signed_volume(a: Point, b: Point, c: Point, d: Point) -> f64 {
    let ab = sub(b, a);
    let ac = sub(c, a);
    let ad = sub(d, a);
    dot(ab, cross(ac, ad)) / 6.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_conventions() {
        let o = [0.0; 3];
        let x = [1.0, 0.0, 0.0];
        let y = [0.0, 1.0, 0.0];
        let z = [0.0, 0.0, 1.0];
        assert_eq!(signed_area_xy(o, x, y), 0.5);
        assert_eq!(signed_area_xy(o, y, x), -0.5);
        assert!((signed_volume(o, x, y, z) - 1.0 / 6.0).abs() < 1e-15);
    }

    #[test]
    fn mean_and_midpoint() {
        assert_eq!(midpoint([0.0; 3], [2.0, 4.0, 6.0]), [1.0, 2.0, 3.0]);
        assert_eq!(mean(&[[0.0; 3], [3.0, 0.0, 0.0], [0.0, 3.0, 0.0]]), [1.0, 1.0, 0.0]);
        assert_eq!(mean(&[]), [0.0; 3]);
    }
}
