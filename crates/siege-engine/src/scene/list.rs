use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices.sort_by_key(|&i| items[i].key);

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::content::TextureId;
    use crate::scene::SpriteCmd;

    fn sprite(tex: u32) -> DrawCmd {
        DrawCmd::Sprite(SpriteCmd {
            texture: TextureId(tex),
            position: Vec2::ZERO,
            rotation: 0.0,
            origin: Vec2::ZERO,
            scale: 1.0,
            depth: 0.0,
        })
    }

    fn paint_order(list: &mut DrawList) -> Vec<u32> {
        list.iter_in_paint_order().map(|i| i.cmd.texture().0).collect()
    }

    #[test]
    fn orders_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push(ZIndex(5), sprite(1));
        list.push(ZIndex(0), sprite(2));
        list.push(ZIndex(5), sprite(3));
        list.push(ZIndex(-1), sprite(4));

        assert_eq!(paint_order(&mut list), vec![4, 2, 1, 3]);
    }

    #[test]
    fn resorts_after_push() {
        let mut list = DrawList::new();
        list.push(ZIndex(1), sprite(1));
        assert_eq!(paint_order(&mut list), vec![1]);

        list.push(ZIndex(0), sprite(2));
        assert_eq!(paint_order(&mut list), vec![2, 1]);
    }

    #[test]
    fn clear_empties_and_restarts_order() {
        let mut list = DrawList::new();
        list.push(ZIndex(0), sprite(1));
        list.clear();
        assert!(list.is_empty());
        assert_eq!(paint_order(&mut list), Vec::<u32>::new());

        list.push(ZIndex(0), sprite(7));
        assert_eq!(list.items()[0].key.order, 0);
    }
}
