use crate::geometry::Quad;
use crate::material::Material;
use crate::math::Point3;

/// Axis-rotatable cube. Faces are derived on every query from the current
/// rotation angles, never cached, so advancing the rotation between frames
/// is reflected by the next `faces` call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cube {
    pub center: Point3,
    pub side_length: f64,
    pub material: Material,
    pub x_rotation: f64,
    pub y_rotation: f64,
    pub z_rotation: f64,
}

impl Cube {
    pub fn new(center: Point3, side_length: f64, material: Material) -> Cube {
        Cube {
            center,
            side_length,
            material,
            x_rotation: 0.0,
            y_rotation: 0.0,
            z_rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, x: f64, y: f64, z: f64) -> Cube {
        self.x_rotation = x;
        self.y_rotation = y;
        self.z_rotation = z;
        self
    }

    pub fn rotate_by(&mut self, x: f64, y: f64, z: f64) {
        self.x_rotation += x;
        self.y_rotation += y;
        self.z_rotation += z;
    }

    /// Maps a unit-cube corner (components ±1) to world space: scale by half
    /// the side length, rotate about Z, then Y, then X (each axis applied to
    /// the coordinates the previous one produced), then translate to the
    /// center. The axis order is load-bearing for multi-axis rotations.
    fn corner(&self, x: f64, y: f64, z: f64) -> Point3 {
        let mut cx = x * self.side_length / 2.0;
        let mut cy = y * self.side_length / 2.0;
        let mut cz = z * self.side_length / 2.0;

        let (sin_z, cos_z) = self.z_rotation.sin_cos();
        (cx, cy) = (cx * cos_z - cy * sin_z, cx * sin_z + cy * cos_z);

        let (sin_y, cos_y) = self.y_rotation.sin_cos();
        (cx, cz) = (cx * cos_y + cz * sin_y, -cx * sin_y + cz * cos_y);

        let (sin_x, cos_x) = self.x_rotation.sin_cos();
        (cy, cz) = (cy * cos_x - cz * sin_x, cy * sin_x + cz * cos_x);

        Point3::new(
            cx + self.center.x,
            cy + self.center.y,
            cz + self.center.z,
        )
    }

    fn top_face(&self) -> Quad {
        Quad::new(
            self.corner(-1.0, 1.0, -1.0),
            self.corner(-1.0, 1.0, 1.0),
            self.corner(1.0, 1.0, -1.0),
            self.material,
        )
    }

    fn bottom_face(&self) -> Quad {
        Quad::new(
            self.corner(-1.0, -1.0, -1.0),
            self.corner(-1.0, -1.0, 1.0),
            self.corner(1.0, -1.0, -1.0),
            self.material,
        )
    }

    fn front_face(&self) -> Quad {
        Quad::new(
            self.corner(-1.0, 1.0, -1.0),
            self.corner(1.0, 1.0, -1.0),
            self.corner(-1.0, -1.0, -1.0),
            self.material,
        )
    }

    fn back_face(&self) -> Quad {
        Quad::new(
            self.corner(-1.0, 1.0, 1.0),
            self.corner(1.0, 1.0, 1.0),
            self.corner(-1.0, -1.0, 1.0),
            self.material,
        )
    }

    fn left_face(&self) -> Quad {
        Quad::new(
            self.corner(-1.0, 1.0, -1.0),
            self.corner(-1.0, 1.0, 1.0),
            self.corner(-1.0, -1.0, -1.0),
            self.material,
        )
    }

    fn right_face(&self) -> Quad {
        Quad::new(
            self.corner(1.0, 1.0, -1.0),
            self.corner(1.0, 1.0, 1.0),
            self.corner(1.0, -1.0, -1.0),
            self.material,
        )
    }

    pub fn faces(&self) -> [Quad; 6] {
        [
            self.back_face(),
            self.front_face(),
            self.left_face(),
            self.right_face(),
            self.top_face(),
            self.bottom_face(),
        ]
    }
}
