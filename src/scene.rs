use ordered_float::OrderedFloat;

use crate::geometry::{Quad, SceneObject};
use crate::material::{Light, Material};
use crate::math::{Point3, Ray, Rgb, Vec3};

/// Image plane: pixel dimensions plus the focal distance from the camera.
/// Fixed for the scene's lifetime.
#[derive(Copy, Clone, Debug)]
pub struct Screen {
    pub width: usize,
    pub height: usize,
    pub distance: f64,
}

impl Screen {
    pub fn new(width: usize, height: usize, distance: f64) -> Screen {
        assert!(width > 0 && height > 0, "screen must have nonzero area");
        Screen {
            width,
            height,
            distance,
        }
    }
}

/// Everything one frame renders from: the flattened primitive list, the
/// lights, and the camera. The scene owns its sequences exclusively; quads
/// are immutable snapshots once added, so a mutated cube must be re-added
/// through `add_object` to take effect.
pub struct Scene {
    pub screen: Screen,
    pub camera_position: Point3,
    pub background_colour: Rgb,
    pub resolution_scale: usize,
    primitives: Vec<Quad>,
    lights: Vec<Light>,
}

/// Per-light shading inputs for one unoccluded (light, hit) pair. All three
/// directions are unit vectors rooted at the biased hit point.
struct LightSample<'a> {
    light: &'a Light,
    to_light: Vec3,
    surface_normal: Vec3,
    to_camera: Vec3,
}

impl Scene {
    pub fn new(
        screen: Screen,
        camera_position: Point3,
        background_colour: Rgb,
        resolution_scale: usize,
    ) -> Scene {
        assert!(resolution_scale >= 1, "resolution scale must be positive");
        Scene {
            screen,
            camera_position,
            background_colour,
            resolution_scale,
            primitives: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn add_object(&mut self, object: impl Into<SceneObject>) {
        object.into().flatten_into(&mut self.primitives);
    }

    pub fn clear_objects(&mut self) {
        self.primitives.clear();
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn primitives(&self) -> &[Quad] {
        &self.primitives
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Colour seen through image-plane coordinates (x, y). Coordinates are
    /// fractional: the frame renderer divides scaled pixel indices back down
    /// by the resolution scale.
    pub fn colour_at(&self, x: f64, y: f64) -> Rgb {
        let pixel = Point3::new(
            x - self.screen.width as f64 / 2.0,
            y - self.screen.height as f64 / 2.0,
            self.screen.distance,
        );
        let camera_ray = Ray::new(self.camera_position, pixel - self.camera_position);

        let nearest = self
            .primitives
            .iter()
            .filter_map(|quad| quad.intersect(camera_ray).map(|point| (quad, point)))
            .min_by_key(|(_, point)| OrderedFloat(point.distance_to(self.camera_position)));

        match nearest {
            Some((quad, point)) => {
                let samples = self.illumination(quad, point);
                if samples.is_empty() {
                    // hit geometry, but nothing lights it; visibly the same
                    // as a miss
                    self.background_colour
                } else {
                    Rgb::from_shading(blinn_phong(quad.material, &samples))
                }
            }
            None => self.background_colour,
        }
    }

    /// One shadow ray per light from the biased hit point. A light
    /// contributes only if that ray clears every primitive in the scene,
    /// the hit surface included.
    fn illumination<'a>(&'a self, quad: &Quad, point: Point3) -> Vec<LightSample<'a>> {
        let mut samples = Vec::with_capacity(self.lights.len());
        for light in &self.lights {
            let shifted = quad.camera_side_point(point, self.camera_position);
            let shadow_ray = Ray::new(shifted, light.position - shifted);

            let occluded = self
                .primitives
                .iter()
                .any(|other| other.intersect(shadow_ray).is_some());
            if occluded {
                continue;
            }

            samples.push(LightSample {
                light,
                to_light: shadow_ray.direction.normalized(),
                surface_normal: quad.plane_normal().normalized(),
                to_camera: (self.camera_position - shifted).normalized(),
            });
        }
        samples
    }
}

/// Blinn-Phong sum over the contributing lights. Dot products enter as
/// absolute values, so surfaces are lit the same from either side of their
/// normal.
fn blinn_phong(material: Material, samples: &[LightSample<'_>]) -> Vec3 {
    let mut total = Vec3::ZERO;
    for sample in samples {
        let ambient = material.ambient.hadamard(sample.light.ambient);

        let l_dot_n = (sample.to_light * sample.surface_normal).abs();
        let diffuse = material.diffuse.hadamard(sample.light.diffuse) * l_dot_n;

        let half = (sample.to_light + sample.to_camera).normalized();
        let specular_factor = (sample.surface_normal * half)
            .abs()
            .powf(material.shininess / 4.0);
        let specular = material.specular.hadamard(sample.light.specular) * specular_factor;

        total = total + ambient + diffuse + specular;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ambient_only(ambient: Vec3) -> Material {
        Material::new(ambient, Vec3::ZERO, Vec3::ZERO, 50.0)
    }

    fn facing_quad_at(z: f64, material: Material) -> Quad {
        Quad::new(
            Point3::new(-100.0, -100.0, z),
            Point3::new(-100.0, 100.0, z),
            Point3::new(100.0, -100.0, z),
            material,
        )
    }

    fn reference_scene() -> Scene {
        Scene::new(
            Screen::new(400, 200, 1000.0),
            Point3::ORIGIN,
            Rgb::BLACK,
            1,
        )
    }

    #[test]
    fn test_center_pixel_hits_and_is_lit() {
        let mut scene = reference_scene();
        let grey = Vec3::new(0.1, 0.2, 0.3);
        scene.add_object(facing_quad_at(
            1500.0,
            Material::new(grey, grey, grey, 50.0),
        ));
        scene.add_light(Light::white(Point3::new(-100.0, -100.0, 1200.0)));

        let colour = scene.colour_at(200.0, 100.0);
        assert_ne!(colour, Rgb::BLACK);
        // the ambient term alone guarantees these floors
        assert!(colour.r >= 25 && colour.g >= 51 && colour.b >= 76);
    }

    #[test]
    fn test_empty_scene_is_background_everywhere() {
        let mut scene = reference_scene();
        scene.background_colour = Rgb::new(12, 34, 56);
        scene.add_light(Light::white(Point3::new(-100.0, -100.0, 1200.0)));

        for y in 0..200 {
            for x in 0..400 {
                assert_eq!(scene.colour_at(x as f64, y as f64), scene.background_colour);
            }
        }
    }

    #[test]
    fn test_nearer_of_two_coplanar_quads_wins() {
        let mut scene = reference_scene();
        scene.add_object(facing_quad_at(1500.0, ambient_only(Vec3::new(1.0, 0.0, 0.0))));
        scene.add_object(facing_quad_at(2000.0, ambient_only(Vec3::new(0.0, 1.0, 0.0))));
        // light in front of both quads; neither occludes the shadow ray
        scene.add_light(Light::white(Point3::new(0.0, 0.0, 100.0)));

        assert_eq!(scene.colour_at(200.0, 100.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_insertion_order_does_not_change_the_winner() {
        let mut scene = reference_scene();
        scene.add_object(facing_quad_at(2000.0, ambient_only(Vec3::new(0.0, 1.0, 0.0))));
        scene.add_object(facing_quad_at(1500.0, ambient_only(Vec3::new(1.0, 0.0, 0.0))));
        scene.add_light(Light::white(Point3::new(0.0, 0.0, 100.0)));

        assert_eq!(scene.colour_at(200.0, 100.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_hit_with_no_lights_falls_back_to_background() {
        let mut scene = reference_scene();
        scene.background_colour = Rgb::new(9, 9, 9);
        scene.add_object(facing_quad_at(1500.0, ambient_only(Vec3::new(1.0, 1.0, 1.0))));

        assert_eq!(scene.colour_at(200.0, 100.0), Rgb::new(9, 9, 9));
    }

    #[test]
    fn test_fully_occluded_hit_falls_back_to_background() {
        let mut scene = reference_scene();
        scene.add_object(facing_quad_at(1500.0, ambient_only(Vec3::new(1.0, 1.0, 1.0))));
        // side screen between the hit point and the light; edge-on to the
        // camera so it never shows up in the primary ray
        scene.add_object(Quad::new(
            Point3::new(150.0, -50.0, 1300.0),
            Point3::new(150.0, 50.0, 1300.0),
            Point3::new(150.0, -50.0, 1400.0),
            ambient_only(Vec3::new(1.0, 1.0, 1.0)),
        ));
        scene.add_light(Light::white(Point3::new(300.0, 0.0, 1200.0)));

        assert_eq!(scene.colour_at(200.0, 100.0), scene.background_colour);
    }

    #[test]
    fn test_two_lights_accumulate() {
        let ambient = Vec3::new(0.2, 0.2, 0.2);
        let mut scene = reference_scene();
        scene.add_object(facing_quad_at(1500.0, ambient_only(ambient)));
        scene.add_light(Light::white(Point3::new(0.0, 0.0, 100.0)));
        scene.add_light(Light::white(Point3::new(50.0, 0.0, 100.0)));

        // two unoccluded lights double the ambient sum: 0.4 * 255 = 102
        assert_eq!(scene.colour_at(200.0, 100.0), Rgb::new(102, 102, 102));
    }

    #[test]
    fn test_clear_objects_empties_the_primitive_list() {
        let mut scene = reference_scene();
        scene.add_object(facing_quad_at(1500.0, ambient_only(Vec3::new(1.0, 0.0, 0.0))));
        assert_eq!(scene.primitives().len(), 1);
        scene.clear_objects();
        assert!(scene.primitives().is_empty());
        scene.add_light(Light::white(Point3::new(0.0, 0.0, 100.0)));
        assert_eq!(scene.colour_at(200.0, 100.0), scene.background_colour);
    }

    #[test]
    #[should_panic(expected = "resolution scale")]
    fn test_zero_resolution_scale_is_rejected() {
        let _ = Scene::new(
            Screen::new(10, 10, 100.0),
            Point3::ORIGIN,
            Rgb::BLACK,
            0,
        );
    }
}
