use anyhow::{Context, Result};
use glam::{Mat4, Quat, Vec2, Vec3};

use crate::anim::{Advance, FrameSequencer, SequenceError};
use crate::camera::Viewpoint;
use crate::content::{ResourceLoader, TextureId};
use crate::scene::{BillboardCmd, DrawCmd, DrawList, ZIndex};

use super::{facing_rotation, BillboardQuad};

/// Animated, camera-facing quad placed in the world (explosions, fire, banners).
#[derive(Debug, Clone)]
pub struct AnimatedBillboard {
    sequencer: FrameSequencer<TextureId>,
    quad: BillboardQuad,

    position: Vec3,
    base_facing: Vec3,

    rotation: Quat,
    world: Mat4,
}

impl AnimatedBillboard {
    /// Creates a billboard at `position` whose unrotated quad faces +Z.
    pub fn new(position: Vec3, size: Vec2, looping: bool) -> Self {
        Self {
            sequencer: FrameSequencer::new(looping),
            quad: BillboardQuad::new(size),
            position,
            base_facing: Vec3::Z,
            rotation: Quat::IDENTITY,
            world: Mat4::from_translation(position),
        }
    }

    /// Overrides the unrotated facing direction.
    ///
    /// Only the horizontal part is used; a vertical or zero vector keeps +Z.
    pub fn with_base_facing(mut self, facing: Vec3) -> Self {
        let horizontal = Vec3::new(facing.x, 0.0, facing.z);
        self.base_facing = horizontal.try_normalize().unwrap_or(Vec3::Z);
        self
    }

    /// Appends a frame.
    pub fn add_frame(&mut self, texture: TextureId, duration: f32) -> Result<(), SequenceError> {
        self.sequencer.add_frame(texture, duration)
    }

    /// Resolves each `(name, duration)` through `loader` and appends it.
    pub fn load_frames(
        &mut self,
        loader: &mut impl ResourceLoader,
        frames: &[(&str, f32)],
    ) -> Result<()> {
        for &(name, duration) in frames {
            let texture = loader
                .load_texture(name)
                .with_context(|| format!("loading billboard frame {name:?}"))?;
            self.add_frame(texture, duration)
                .with_context(|| format!("adding billboard frame {name:?}"))?;
        }
        Ok(())
    }

    /// Advances the animation and re-orients toward `viewpoint`.
    ///
    /// Orientation is refreshed even while paused so a frozen frame still faces
    /// the viewer. With the viewpoint straight above or below, the previous
    /// rotation is kept.
    pub fn update(&mut self, dt: f32, viewpoint: &impl Viewpoint) -> Advance {
        let advance = self.sequencer.advance(dt);

        match facing_rotation(self.base_facing, self.position, viewpoint.position()) {
            Some(rotation) => self.rotation = rotation,
            None => log::trace!("AnimatedBillboard: viewpoint overhead; keeping rotation"),
        }
        self.world = Mat4::from_rotation_translation(self.rotation, self.position);

        advance
    }

    /// Records the current frame into `list`. Returns `false` when there is
    /// nothing to draw.
    pub fn draw(&self, list: &mut DrawList, z: ZIndex) -> bool {
        let Ok(frame) = self.sequencer.current_frame() else {
            log::debug!("AnimatedBillboard: no frames loaded; skipping draw");
            return false;
        };

        list.push(
            z,
            DrawCmd::Billboard(BillboardCmd {
                texture: *frame.resource(),
                world: self.world,
                size: self.quad.size(),
            }),
        );
        true
    }

    // ── playback control ──────────────────────────────────────────────────

    pub fn prepare(&mut self) {
        self.sequencer.prepare();
    }

    pub fn play(&mut self) {
        self.sequencer.play();
    }

    pub fn pause(&mut self) {
        self.sequencer.pause();
    }

    pub fn stop(&mut self) {
        self.sequencer.stop();
    }

    pub fn reset(&mut self) {
        self.sequencer.reset();
    }

    pub fn is_paused(&self) -> bool {
        self.sequencer.is_paused()
    }

    // ── placement ─────────────────────────────────────────────────────────

    /// Moves the billboard. The transform is rebuilt on the next `update`.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn world(&self) -> Mat4 {
        self.world
    }

    pub fn quad(&self) -> &BillboardQuad {
        &self.quad
    }

    pub fn sequencer(&self) -> &FrameSequencer<TextureId> {
        &self.sequencer
    }
}
