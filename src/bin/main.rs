extern crate rust_raycaster as root;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use root::parsing::config::{get_settings, Config, RendererType};
use root::parsing::{construct_scene, AnimatedCube};
use root::prelude::*;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
    /// Ignore the scene file and render the built-in demo scene.
    #[structopt(long)]
    pub demo: bool,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        _ => default,
    }
}

fn write_png(film: &Film<Rgb>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("couldn't create output directory {}", parent.display()))?;
    }
    let mut image = image::RgbImage::new(film.width as u32, film.height as u32);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let colour = film.at(x as usize, y as usize);
        *pixel = image::Rgb([colour.r, colour.g, colour.b]);
    }
    image
        .save(path)
        .with_context(|| format!("couldn't write {}", path.display()))
}

/// Green floor patch, a spinning cube resting on it, one light above and
/// behind. Material colour is jittered per run.
fn build_demo_scene(config: &Config) -> (Scene, Vec<Quad>, Vec<AnimatedCube>) {
    let mut rng = rand::thread_rng();
    let width = config.screen.width as f64;
    let height = config.screen.height as f64;
    let distance = config.screen.distance;

    let floor_material = Material::new(
        Vec3::new(
            rng.gen_range(0.0..0.4),
            0.6 + rng.gen_range(0.0..0.4),
            rng.gen_range(0.0..0.004),
        ),
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(0.8, 0.8, 0.8),
        50.0,
    );
    let cube_material = Material::new(
        Vec3::new(
            0.6 + rng.gen_range(0.0..0.4),
            rng.gen_range(0.0..0.2),
            rng.gen_range(0.0..0.2),
        ),
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(0.8, 0.8, 0.8),
        50.0,
    );

    let quads = vec![Quad::new(
        Point3::new(-width / 2.0, -height / 2.0, distance),
        Point3::new(-width / 2.0, -height / 2.0, distance + width),
        Point3::new(width / 2.0, -height / 2.0, distance),
        floor_material,
    )];
    let cubes = vec![AnimatedCube {
        cube: Cube::new(
            Point3::new(0.0, -height / 2.0 + 60.0, distance + 150.0),
            120.0,
            cube_material,
        ),
        spin: Vec3::new(0.02, 0.05, 0.0),
    }];

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
    scene.add_light(Light::white(Point3::new(
        -width / 4.0,
        -height / 2.0 + 50.0,
        width * 4.0 + distance,
    )));

    (scene, quads, cubes)
}

/// Animation step hook: rebuilds the primitive list from the source objects
/// with every cube advanced by its spin. Everything it needs arrives as an
/// explicit argument.
fn advance_scene(scene: &mut Scene, quads: &[Quad], cubes: &mut [AnimatedCube]) {
    scene.clear_objects();
    for quad in quads {
        scene.add_object(*quad);
    }
    for animated in cubes.iter_mut() {
        let spin = animated.spin;
        animated.cube.rotate_by(spin.x, spin.y, spin.z);
        scene.add_object(animated.cube);
    }
}

fn main() -> Result<()> {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, LevelFilter::INFO))
        .init();

    let mut toml_config = get_settings(&opts.config_file)?;
    // override scene file based on provided command line argument
    toml_config.default_scene_file = opts
        .scene_file
        .unwrap_or(toml_config.default_scene_file);
    let config = Config::from(toml_config);

    let threads = config
        .threads
        .map(|t| t as usize)
        .unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;

    let (mut scene, quads, mut cubes) = if opts.demo {
        build_demo_scene(&config)
    } else {
        construct_scene(&config)?
    };

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }

    let now = Instant::now();
    match config.renderer {
        RendererType::Image => {
            let film = render_image(&scene);
            let path = PathBuf::from(format!("output/{}.png", config.output));
            write_png(&film, &path)?;
            info!(path = %path.display(), "wrote still image");
        }
        RendererType::Animation { frame_count } => {
            let renderer = AnimationRenderer::new(frame_count);
            let output = config.output.clone();
            renderer.render(
                &mut scene,
                |scene| advance_scene(scene, &quads, &mut cubes),
                move |frame, film| {
                    let path = PathBuf::from(format!("output/{}_{:04}.png", output, frame));
                    write_png(&film, &path)
                },
            )?;
            info!(frame_count, "wrote animation frames");
        }
    }
    info!("took {:.2}s", now.elapsed().as_secs_f64());

    Ok(())
}
