mod animation;
mod film;

pub use animation::AnimationRenderer;
pub use film::Film;

use rayon::prelude::*;

use crate::math::Rgb;
use crate::scene::Scene;

/// Renders one frame into a pixel buffer of
/// `(width * scale) x (height * scale)`. Each scaled pixel is an independent
/// sample taken at the fractional unscaled coordinate, and rows are written
/// flipped vertically: buffer row 0 holds the highest y.
pub fn render_image(scene: &Scene) -> Film<Rgb> {
    let scale = scene.resolution_scale;
    let width = scene.screen.width * scale;
    let height = scene.screen.height * scale;

    let mut film = Film::new(width, height, scene.background_colour);
    film.buffer
        .par_iter_mut()
        .enumerate()
        .for_each(|(pixel_index, pixel_ref)| {
            let row = pixel_index / width;
            let column = pixel_index - width * row;
            let y = height - 1 - row;
            *pixel_ref = scene.colour_at(column as f64 / scale as f64, y as f64 / scale as f64);
        });
    film
}
