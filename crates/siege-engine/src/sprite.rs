//! Screen-space animation sequences (HUD effects, cursor animations).

use anyhow::{Context, Result};
use glam::Vec2;

use crate::anim::{Advance, FrameSequencer, SequenceError};
use crate::content::{ResourceLoader, TextureId};
use crate::scene::{DrawCmd, DrawList, SpriteCmd, ZIndex};

/// Fixed draw parameters of a sequence, chosen at construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpriteParams {
    pub rotation: f32,
    pub scale: f32,
    pub origin: Vec2,
    /// Layer depth, 0 = front, 1 = back.
    pub depth: f32,
}

impl Default for SpriteParams {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            scale: 1.0,
            origin: Vec2::ZERO,
            depth: 0.0,
        }
    }
}

/// Frame animation drawn at a caller-supplied screen position.
#[derive(Debug, Clone)]
pub struct AnimationSequence {
    sequencer: FrameSequencer<TextureId>,
    params: SpriteParams,
}

impl AnimationSequence {
    pub fn new(looping: bool, params: SpriteParams) -> Self {
        Self {
            sequencer: FrameSequencer::new(looping),
            params,
        }
    }

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
                .with_context(|| format!("loading sequence frame {name:?}"))?;
            self.add_frame(texture, duration)
                .with_context(|| format!("adding sequence frame {name:?}"))?;
        }
        Ok(())
    }

    pub fn update(&mut self, dt: f32) -> Advance {
        self.sequencer.advance(dt)
    }

    /// Records the current frame at `position`. Returns `false` when empty.
    pub fn draw(&self, list: &mut DrawList, position: Vec2) -> bool {
        let Ok(frame) = self.sequencer.current_frame() else {
            log::debug!("AnimationSequence: no frames loaded; skipping draw");
            return false;
        };

        let p = self.params;
        list.push(
            ZIndex::from_depth(p.depth),
            DrawCmd::Sprite(SpriteCmd {
                texture: *frame.resource(),
                position,
                rotation: p.rotation,
                origin: p.origin,
                scale: p.scale,
                depth: p.depth,
            }),
        );
        true
    }

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

    pub fn params(&self) -> SpriteParams {
        self.params
    }

    pub fn sequencer(&self) -> &FrameSequencer<TextureId> {
        &self.sequencer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TextureRegistry;

    fn cursor(reg: &mut TextureRegistry) -> AnimationSequence {
        let params = SpriteParams {
            rotation: 0.5,
            scale: 2.0,
            origin: Vec2::new(8.0, 8.0),
            depth: 0.2,
        };
        let mut seq = AnimationSequence::new(true, params);
        seq.load_frames(reg, &[("cursor/0", 0.1), ("cursor/1", 0.1), ("cursor/2", 0.1)])
            .unwrap();
        seq
    }

    #[test]
    fn draws_current_frame_with_fixed_params() {
        let mut reg = TextureRegistry::new();
        let mut seq = cursor(&mut reg);
        seq.update(0.15);

        let mut list = DrawList::new();
        assert!(seq.draw(&mut list, Vec2::new(100.0, 40.0)));

        let item = &list.items()[0];
        let DrawCmd::Sprite(cmd) = &item.cmd else {
            panic!("expected sprite command");
        };
        assert_eq!(reg.name_of(cmd.texture), Some("cursor/1"));
        assert_eq!(cmd.position, Vec2::new(100.0, 40.0));
        assert_eq!(cmd.rotation, 0.5);
        assert_eq!(cmd.scale, 2.0);
        assert_eq!(cmd.origin, Vec2::new(8.0, 8.0));
        assert_eq!(item.key.z, ZIndex::from_depth(0.2));
    }

    #[test]
    fn looping_sequence_wraps() {
        let mut reg = TextureRegistry::new();
        let mut seq = cursor(&mut reg);
        let adv = seq.update(0.35);
        assert_eq!(adv.wraps, 1);
        assert_eq!(seq.sequencer().index(), 0);
        assert!(!seq.is_paused());
    }

    #[test]
    fn paused_sequence_holds_frame() {
        let mut reg = TextureRegistry::new();
        let mut seq = cursor(&mut reg);
        seq.update(0.15);
        seq.pause();
        seq.update(10.0);
        assert_eq!(seq.sequencer().index(), 1);

        seq.stop();
        assert_eq!(seq.sequencer().index(), 0);
        assert!(seq.is_paused());
    }

    #[test]
    fn empty_sequence_draws_nothing() {
        let seq = AnimationSequence::new(false, SpriteParams::default());
        let mut list = DrawList::new();
        assert!(!seq.draw(&mut list, Vec2::ZERO));
        assert!(list.is_empty());
    }

    #[test]
    fn front_sprites_paint_after_back_sprites() {
        let mut reg = TextureRegistry::new();
        let tex = reg.load_texture("banner").unwrap();

        let front_params = SpriteParams { depth: 0.0, ..Default::default() };
        let back_params = SpriteParams { depth: 1.0, ..Default::default() };
        let mut front = AnimationSequence::new(true, front_params);
        let mut back = AnimationSequence::new(true, back_params);
        front.add_frame(tex, 1.0).unwrap();
        back.add_frame(tex, 1.0).unwrap();

        let mut list = DrawList::new();
        front.draw(&mut list, Vec2::new(1.0, 0.0));
        back.draw(&mut list, Vec2::new(2.0, 0.0));

        let xs: Vec<f32> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Sprite(cmd) => cmd.position.x,
                DrawCmd::Billboard(_) => unreachable!(),
            })
            .collect();
        assert_eq!(xs, vec![2.0, 1.0]);
    }
}
