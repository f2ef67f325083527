use super::scene::Scene;
use super::surface::RenderSurface;
use rand::Rng;
use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;

/// Shared stop flag for the frame loop. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Drives one scene pass per display refresh until cancelled.
pub struct FrameScheduler<R: Rng> {
    scene: Scene<R>,
    token: CancelToken,
    frames: u64,
}

impl<R: Rng> FrameScheduler<R> {
    pub fn new(scene: Scene<R>, token: CancelToken) -> Self {
        Self {
            scene,
            token,
            frames: 0,
        }
    }

    pub fn scene(&self) -> &Scene<R> {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene<R> {
        &mut self.scene
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    /// Frames rendered so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Render one frame, or break without touching the surface once the
    /// token is cancelled.
    pub fn tick<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> ControlFlow<()> {
        if self.token.is_cancelled() {
            return ControlFlow::Break(());
        }
        self.scene.render(surface);
        self.frames += 1;
        ControlFlow::Continue(())
    }

    /// Tick until cancelled or `max_frames` is reached; returns frames rendered.
    pub fn run_for<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, max_frames: u64) -> u64 {
        let start = self.frames;
        while self.frames - start < max_frames {
            if self.tick(surface).is_break() {
                break;
            }
        }
        self.frames - start
    }
}
