//! Morph-target keyframe cycling.
//!
//! Tracks which two keyframes a morphing mesh should blend between and how
//! far along that blend it is. The mesh data itself lives with the renderer.

/// Blend between two keyframes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MorphBlend {
    pub from: usize,
    pub to: usize,
    pub t: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MorphAnimator {
    frame_count: usize,
    frame_time: f32,
    timer: f32,
    index: usize,
    playing: bool,
}

impl MorphAnimator {
    pub fn new(frame_count: usize, frame_time: f32) -> Self {
        Self {
            frame_count,
            frame_time,
            timer: 0.0,
            index: 0,
            playing: false,
        }
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance the animation. The timer snaps back to zero on each frame
    /// change rather than carrying the overshoot.
    pub fn update(&mut self, dt: f32) {
        if !self.playing || self.frame_count == 0 {
            return;
        }
        self.timer += dt;
        if self.timer > self.frame_time {
            self.timer = 0.0;
            self.index = if self.index + 1 < self.frame_count {
                self.index + 1
            } else {
                0
            };
        }
    }

    /// Current keyframe pair and blend factor.
    pub fn blend(&self) -> MorphBlend {
        if self.frame_count == 0 {
            return MorphBlend::default();
        }
        let to = if self.index + 1 >= self.frame_count {
            0
        } else {
            self.index + 1
        };
        let t = if self.frame_time > 0.0 {
            self.timer / self.frame_time
        } else {
            0.0
        };
        MorphBlend {
            from: self.index,
            to,
            t,
        }
    }
}
