use crate::math::{Point3, Vec3};

/// Blinn-Phong reflectance parameters. Each term is a per-channel fraction
/// in [0, 1], optionally pre-multiplied by an RGB colour in [0, 255].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f64,
}

impl Material {
    pub fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3, shininess: f64) -> Material {
        assert!(shininess > 0.0, "shininess must be positive");
        Material {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }
}

/// Point emitter. No attenuation by distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Point3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Light {
    pub fn new(position: Point3, ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Light {
        Light {
            position,
            ambient,
            diffuse,
            specular,
        }
    }

    /// Full-intensity white emitter.
    pub fn white(position: Point3) -> Light {
        let one = Vec3::new(1.0, 1.0, 1.0);
        Light::new(position, one, one, one)
    }
}
