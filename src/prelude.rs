pub use crate::geometry::{Cube, Quad, SceneObject};
pub use crate::material::{Light, Material};
pub use crate::math::{Point3, Ray, Rgb, Vec3};
pub use crate::renderer::{render_image, AnimationRenderer, Film};
pub use crate::scene::{Scene, Screen};
pub use crate::NORMAL_OFFSET;

pub use std::f64::consts::{PI, TAU};
