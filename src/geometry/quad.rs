use crate::material::Material;
use crate::math::{Point3, Ray, Vec3};
use crate::NORMAL_OFFSET;

/// Planar bounded patch. `p1` is the shared corner; the edges p1→p2 and
/// p1→p3 span a parallelogram. The plane normal is cached at construction
/// and is not unit length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quad {
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
    pub material: Material,
    plane_normal: Vec3,
}

impl Quad {
    pub fn new(p1: Point3, p2: Point3, p3: Point3, material: Material) -> Quad {
        let plane_normal = (p2 - p1).cross(p3 - p1);
        assert!(
            plane_normal != Vec3::ZERO,
            "degenerate quad: corners are collinear or coincident"
        );
        Quad {
            p1,
            p2,
            p3,
            material,
            plane_normal,
        }
    }

    pub fn plane_normal(&self) -> Vec3 {
        self.plane_normal
    }

    /// Ray/patch intersection. Hits exactly on an edge are treated as
    /// misses (open-interval bound test); adjacent coplanar quads can show
    /// hairline gaps along shared edges. That is a documented artifact of
    /// the bound policy, not something to tighten.
    pub fn intersect(&self, ray: Ray) -> Option<Point3> {
        let unit_direction = ray.direction.normalized();

        let n_dot_u = self.plane_normal * unit_direction;
        if n_dot_u == 0.0 {
            // ray is parallel to the plane
            return None;
        }

        let w = ray.origin - self.p1;
        let s1 = -(self.plane_normal * w) / n_dot_u;
        if s1 < 0.0 {
            // the plane lies behind the ray origin
            return None;
        }

        let intersection = ray.origin + unit_direction * s1;

        let am = intersection - self.p1;
        let ab = self.p2 - self.p1;
        let ad = self.p3 - self.p1;

        let am_dot_ab = am * ab;
        let ab_dot_ab = ab * ab;
        let am_dot_ad = am * ad;
        let ad_dot_ad = ad * ad;

        if 0.0 < am_dot_ab && am_dot_ab < ab_dot_ab && 0.0 < am_dot_ad && am_dot_ad < ad_dot_ad {
            Some(intersection)
        } else {
            None
        }
    }

    /// Shifts `point` off the surface along the plane normal, picking the
    /// camera-facing side. Keeps shadow rays from re-intersecting the
    /// surface they start on, whichever way the normal happens to point.
    pub fn camera_side_point(&self, point: Point3, camera_position: Point3) -> Point3 {
        let shift = self.plane_normal.normalized() * NORMAL_OFFSET;

        let shifted_out = point + shift;
        let shifted_in = point - shift;

        if shifted_out.distance_to(camera_position) < shifted_in.distance_to(camera_position) {
            shifted_out
        } else {
            shifted_in
        }
    }
}
