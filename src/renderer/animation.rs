use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use crossbeam::channel::unbounded;
use tracing::info;

use crate::math::Rgb;
use crate::renderer::{render_image, Film};
use crate::scene::Scene;

/// Drives the per-frame loop: render, hand the finished film to the sink,
/// then let the step hook mutate the scene for the next frame. Rendering a
/// frame never overlaps scene mutation for that frame, and cancellation only
/// lands on frame boundaries — a frame that started rendering is always
/// completed and flushed.
pub struct AnimationRenderer {
    frame_count: usize,
    stop: Arc<AtomicBool>,
}

impl AnimationRenderer {
    pub fn new(frame_count: usize) -> AnimationRenderer {
        AnimationRenderer {
            frame_count,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared flag for external cancellation. Setting it stops the loop
    /// after the in-flight frame is finished and handed off.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// `step` receives the scene by explicit reference and must leave it
    /// fully consistent (primitives cleared and re-added, rotations
    /// advanced) before the next frame renders. It runs after every frame,
    /// the last included, so a follow-up render continues the motion.
    ///
    /// The sink runs on a writer thread fed through a channel, so encoding
    /// one frame overlaps rendering the next.
    pub fn render<Step, Sink>(&self, scene: &mut Scene, mut step: Step, mut sink: Sink) -> Result<()>
    where
        Step: FnMut(&mut Scene),
        Sink: FnMut(usize, Film<Rgb>) -> Result<()> + Send,
    {
        let (tx, rx) = unbounded::<(usize, Film<Rgb>)>();

        crossbeam::scope(|s| {
            let writer = s.spawn(move |_| -> Result<()> {
                for (frame, film) in rx.iter() {
                    sink(frame, film)?;
                }
                Ok(())
            });

            for frame in 0..self.frame_count {
                info!(frame, "rendering frame");
                let film = render_image(scene);
                if tx.send((frame, film)).is_err() {
                    // writer bailed early; its error surfaces from join
                    break;
                }
                if self.stop.load(Ordering::Relaxed) {
                    info!(frame, "stop requested, finishing early");
                    break;
                }
                step(scene);
            }

            drop(tx);
            writer.join().expect("frame writer thread panicked")
        })
        .expect("animation scope panicked")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::scene::Screen;
    use anyhow::anyhow;
    use std::sync::Mutex;

    fn tiny_scene() -> Scene {
        Scene::new(Screen::new(2, 2, 10.0), Point3::ORIGIN, Rgb::BLACK, 1)
    }

    #[test]
    fn test_renders_one_frame_per_step() {
        let mut scene = tiny_scene();
        let renderer = AnimationRenderer::new(4);

        let frames = Mutex::new(Vec::new());
        let mut steps = 0;
        renderer
            .render(
                &mut scene,
                |_| steps += 1,
                |frame, film| {
                    assert_eq!(film.total_pixels(), 4);
                    frames.lock().unwrap().push(frame);
                    Ok(())
                },
            )
            .unwrap();

        assert_eq!(*frames.lock().unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(steps, 4);
    }

    #[test]
    fn test_stop_flag_finishes_the_current_frame_then_exits() {
        let mut scene = tiny_scene();
        let renderer = AnimationRenderer::new(100);
        let stop = renderer.stop_handle();

        let frames = Mutex::new(Vec::new());
        let mut steps = 0;
        renderer
            .render(
                &mut scene,
                |_| {
                    steps += 1;
                    // cancel while "between" frames; frame 1 must still be
                    // rendered and flushed in full
                    stop.store(true, Ordering::Relaxed);
                },
                |frame, _| {
                    frames.lock().unwrap().push(frame);
                    Ok(())
                },
            )
            .unwrap();

        assert_eq!(*frames.lock().unwrap(), vec![0, 1]);
        assert_eq!(steps, 1);
    }

    #[test]
    fn test_sink_errors_stop_the_loop_and_propagate() {
        let mut scene = tiny_scene();
        let renderer = AnimationRenderer::new(100);

        let result = renderer.render(
            &mut scene,
            |_| {},
            |frame, _| {
                if frame == 2 {
                    Err(anyhow!("disk full"))
                } else {
                    Ok(())
                }
            },
        );

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("disk full"));
    }
}
