use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::math::{Point3, Rgb};
use crate::scene::Screen;

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct ScreenSettings {
    pub width: usize,
    pub height: usize,
    pub distance: f64,
}

#[derive(Deserialize, Copy, Clone, Debug)]
#[serde(tag = "type")]
pub enum RendererType {
    Image,
    Animation { frame_count: usize },
}

fn default_resolution_scale() -> usize {
    1
}

/// Raw on-disk form. Converted into the validated [`Config`] before use.
#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub default_scene_file: String,
    pub camera_position: [f64; 3],
    pub screen: ScreenSettings,
    pub background_colour: [u8; 3],
    #[serde(default = "default_resolution_scale")]
    pub resolution_scale: usize,
    pub threads: Option<u16>,
    pub renderer: RendererType,
    pub output: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub scene_file: String,
    pub camera_position: Point3,
    pub screen: Screen,
    pub background_colour: Rgb,
    pub resolution_scale: usize,
    pub threads: Option<u16>,
    pub renderer: RendererType,
    pub output: String,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            scene_file: data.default_scene_file,
            camera_position: Point3::from(data.camera_position),
            screen: Screen::new(
                data.screen.width,
                data.screen.height,
                data.screen.distance,
            ),
            background_colour: Rgb::from(data.background_colour),
            resolution_scale: data.resolution_scale,
            threads: data.threads,
            renderer: data.renderer,
            output: data.output.unwrap_or_else(|| String::from("trace")),
        }
    }
}

pub fn get_settings(filepath: impl AsRef<Path>) -> Result<TOMLConfig> {
    let filepath = filepath.as_ref();
    let contents = std::fs::read_to_string(filepath)
        .with_context(|| format!("couldn't read config file {}", filepath.display()))?;
    let settings: TOMLConfig = toml::from_str(&contents)
        .with_context(|| format!("couldn't parse config file {}", filepath.display()))?;
    Ok(settings)
}
