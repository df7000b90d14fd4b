use crate::math::{Point3, Vec3};

/// Origin plus direction. The direction is not required to be normalized;
/// intersection code normalizes internally.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Ray {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_at_parameter() {
        let r = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(r.point_at_parameter(0.0), r.origin);
        assert_eq!(r.point_at_parameter(1.5), Point3::new(1.0, 3.0, 0.0));
    }
}
