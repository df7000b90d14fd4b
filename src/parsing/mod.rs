pub mod config;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::geometry::{Cube, Quad};
use crate::material::{Light, Material};
use crate::math::{Point3, Vec3};
use crate::parsing::config::Config;
use crate::scene::Scene;

pub type Vec3Data = [f64; 3];
pub type Point3Data = [f64; 3];

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct MaterialData {
    pub ambient: Vec3Data,
    pub diffuse: Vec3Data,
    pub specular: Vec3Data,
    pub shininess: f64,
}

impl From<MaterialData> for Material {
    fn from(data: MaterialData) -> Self {
        Material::new(
            Vec3::from(data.ambient),
            Vec3::from(data.diffuse),
            Vec3::from(data.specular),
            data.shininess,
        )
    }
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct QuadData {
    pub p1: Point3Data,
    pub p2: Point3Data,
    pub p3: Point3Data,
    pub material: MaterialData,
}

impl From<QuadData> for Quad {
    fn from(data: QuadData) -> Self {
        Quad::new(
            Point3::from(data.p1),
            Point3::from(data.p2),
            Point3::from(data.p3),
            Material::from(data.material),
        )
    }
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct CubeData {
    pub center: Point3Data,
    pub side_length: f64,
    #[serde(default)]
    pub rotation: Vec3Data,
    /// Rotation advance per animation step, radians about x/y/z.
    #[serde(default)]
    pub spin: Vec3Data,
    pub material: MaterialData,
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct LightData {
    pub position: Point3Data,
    pub ambient: Option<Vec3Data>,
    pub diffuse: Option<Vec3Data>,
    pub specular: Option<Vec3Data>,
}

impl From<LightData> for Light {
    fn from(data: LightData) -> Self {
        let white = [1.0, 1.0, 1.0];
        Light::new(
            Point3::from(data.position),
            Vec3::from(data.ambient.unwrap_or(white)),
            Vec3::from(data.diffuse.unwrap_or(white)),
            Vec3::from(data.specular.unwrap_or(white)),
        )
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct SceneData {
    #[serde(default)]
    pub quads: Vec<QuadData>,
    #[serde(default)]
    pub cubes: Vec<CubeData>,
    #[serde(default)]
    pub lights: Vec<LightData>,
}

/// A cube plus its per-step rotation advance, kept by the animation step
/// hook after ingestion.
#[derive(Copy, Clone, Debug)]
pub struct AnimatedCube {
    pub cube: Cube,
    pub spin: Vec3,
}

impl From<CubeData> for AnimatedCube {
    fn from(data: CubeData) -> Self {
        AnimatedCube {
            cube: Cube::new(
                Point3::from(data.center),
                data.side_length,
                Material::from(data.material),
            )
            .with_rotation(data.rotation[0], data.rotation[1], data.rotation[2]),
            spin: Vec3::from(data.spin),
        }
    }
}

pub fn load_scene_data(filepath: impl AsRef<Path>) -> Result<SceneData> {
    let filepath = filepath.as_ref();
    let contents = std::fs::read_to_string(filepath)
        .with_context(|| format!("couldn't read scene file {}", filepath.display()))?;
    let data: SceneData = toml::from_str(&contents)
        .with_context(|| format!("couldn't parse scene file {}", filepath.display()))?;
    Ok(data)
}

/// Builds the scene described by `config`: loads the scene file, flattens
/// quads and cubes into the scene, and returns the source objects the
/// animation step hook re-ingests each frame.
pub fn construct_scene(config: &Config) -> Result<(Scene, Vec<Quad>, Vec<AnimatedCube>)> {
    let data = load_scene_data(&config.scene_file)?;

    let quads: Vec<Quad> = data.quads.iter().map(|&q| Quad::from(q)).collect();
    let cubes: Vec<AnimatedCube> = data.cubes.iter().map(|&c| AnimatedCube::from(c)).collect();

    let mut scene = Scene::new(
        config.screen,
        config.camera_position,
        config.background_colour,
        config.resolution_scale,
    );
    for quad in &quads {
        scene.add_object(*quad);
    }
    for animated in &cubes {
        scene.add_object(animated.cube);
    }
    for light in &data.lights {
        scene.add_light(Light::from(*light));
    }

    info!(
        primitives = scene.primitives().len(),
        lights = scene.lights().len(),
        scene_file = %config.scene_file,
        "constructed scene"
    );
    Ok((scene, quads, cubes))
}
