//! Plane geometry helpers used by placement and layout.
//!
//! Pure functions over `nalgebra::Vector2<f64>`; no store access.

use nalgebra::Vector2;

/// Mean of a point set. `None` for an empty set.
pub fn centroid<I>(points: I) -> Option<Vector2<f64>>
where
    I: IntoIterator<Item = Vector2<f64>>,
{
    let mut sum = Vector2::zeros();
    let mut n = 0usize;
    for p in points {
        sum += p;
        n += 1;
    }
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

/// Unit vector along `v`; the +x axis when `v` has zero (or non-finite) length.
#[inline]
pub fn direction_or_unit(v: Vector2<f64>) -> Vector2<f64> {
    let norm = v.norm();
    if !norm.is_finite() || norm <= 0.0 {
        return Vector2::x();
    }
    v / norm
}

#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Point `i` of `n` evenly spaced on a circle, starting at angle 0.
#[inline]
pub fn on_circle(center: Vector2<f64>, radius: f64, i: usize, n: usize) -> Vector2<f64> {
    let theta = std::f64::consts::TAU * i as f64 / n.max(1) as f64;
    center + Vector2::new(theta.cos(), theta.sin()) * radius
}

/// Axis-aligned bounds as `(min_x, min_y, width, height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for BoundingBox {
    /// View used when there is nothing to fit.
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }
}

impl BoundingBox {
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let (mut lo, mut hi) = (first, first);
        for p in it {
            lo = lo.inf(&p);
            hi = hi.sup(&p);
        }
        Some(Self {
            min_x: lo.x,
            min_y: lo.y,
            width: hi.x - lo.x,
            height: hi.y - lo.y,
        })
    }

    #[inline]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn centroid_of_square() {
        let pts = [
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
        ];
        let c = centroid(pts).unwrap();
        assert!((c - vector![1.0, 1.0]).norm() < 1e-12);
        assert!(centroid(std::iter::empty()).is_none());
    }

    #[test]
    fn zero_direction_falls_back_to_unit() {
        let d = direction_or_unit(Vector2::zeros());
        assert!((d.norm() - 1.0).abs() < 1e-12);
        let e = direction_or_unit(vector![3.0, 4.0]);
        assert!((e - vector![0.6, 0.8]).norm() < 1e-12);
    }

    #[test]
    fn circle_points_are_even() {
        let c = vector![10.0, -5.0];
        for i in 0..6 {
            let p = on_circle(c, 3.0, i, 6);
            assert!((distance(p, c) - 3.0).abs() < 1e-12);
        }
        let p1 = on_circle(c, 3.0, 1, 4);
        assert!((p1 - vector![10.0, -2.0]).norm() < 1e-12);
    }

    #[test]
    fn bounding_box_spans_points() {
        let bb = BoundingBox::from_points([vector![1.0, 5.0], vector![-2.0, 7.0], vector![4.0, 6.0]])
            .unwrap();
        assert_eq!(bb.as_tuple(), (-2.0, 5.0, 6.0, 2.0));
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
        assert_eq!(BoundingBox::default().as_tuple(), (0.0, 0.0, 800.0, 600.0));
    }
}
