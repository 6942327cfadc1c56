use tracing::{debug, warn};

use crate::constants::DEFAULT_GROUP_COUNT;
use crate::error::{CarouselError, Result};
use crate::state::Direction;
use crate::ui::UiLayer;

/// Current slide index of every carousel group on a page.
///
/// The table is the only record of which item a group shows. Visibility is
/// changed exclusively through [`UiLayer::set_visibility`], and [`sync`]
/// brings a surface back in line when it may have drifted.
///
/// [`sync`]: SlideIndexTable::sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideIndexTable {
    indices: Vec<usize>,
}

impl Default for SlideIndexTable {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_COUNT)
    }
}

impl SlideIndexTable {
    pub fn new(groups: usize) -> Self {
        Self { indices: vec![0; groups] }
    }

    pub fn group_count(&self) -> usize {
        self.indices.len()
    }

    pub fn current(&self, group: usize) -> Result<usize> {
        self.indices
            .get(group)
            .copied()
            .ok_or(CarouselError::UnknownGroup { group, groups: self.indices.len() })
    }

    /// Rewinds `group` to its first slide without touching the surface.
    /// Follow with [`SlideIndexTable::sync`] to update what is shown.
    pub fn reset(&mut self, group: usize) -> Result<()> {
        self.slot(group).map(|index| *index = 0)
    }

    /// Hides the current item of `group`, moves `step` positions with
    /// wraparound and shows the item landed on. Returns the new index.
    ///
    /// Past the last item the index restarts at 0, before the first it jumps
    /// to the last item. Nothing is mutated when an error is returned.
    pub fn advance<U: UiLayer>(&mut self, step: isize, group: usize, ui: &mut U) -> Result<usize> {
        let current = self.current(group)?;
        let items = ui.group_items(group);
        if items.is_empty() {
            return Err(CarouselError::EmptyGroup { group });
        }

        match items.get(current) {
            Some(item) => ui.set_visibility(item, false),
            None => warn!(group, current, count = items.len(), "stored slide index is stale, nothing to hide"),
        }

        let next = wrap_index(current, step, items.len());
        *self.slot(group)? = next;
        ui.set_visibility(&items[next], true);

        debug!(group, step, from = current, to = next, "advanced carousel");
        Ok(next)
    }

    pub fn step<U: UiLayer>(&mut self, direction: Direction, group: usize, ui: &mut U) -> Result<usize> {
        self.advance(direction.step(), group, ui)
    }

    /// Makes the surface show exactly the stored item of `group`.
    ///
    /// A stored index left beyond a shrunken collection is clamped to the
    /// last item first. Returns the index that ends up visible.
    pub fn sync<U: UiLayer>(&mut self, group: usize, ui: &mut U) -> Result<usize> {
        let current = self.current(group)?;
        let items = ui.group_items(group);
        if items.is_empty() {
            return Err(CarouselError::EmptyGroup { group });
        }

        let index = current.min(items.len() - 1);
        if index != current {
            warn!(group, current, clamped = index, "slide index clamped to shrunken group");
        }
        *self.slot(group)? = index;

        for (i, item) in items.iter().enumerate() {
            ui.set_visibility(item, i == index);
        }
        Ok(index)
    }

    fn slot(&mut self, group: usize) -> Result<&mut usize> {
        let groups = self.indices.len();
        self.indices
            .get_mut(group)
            .ok_or(CarouselError::UnknownGroup { group, groups })
    }
}

/// Index reached from `current` after `step` in a collection of `count`
/// items. `count` must be non-zero.
pub fn wrap_index(current: usize, step: isize, count: usize) -> usize {
    match current.checked_add_signed(step) {
        Some(candidate) if candidate >= count => 0,
        Some(candidate) => candidate,
        None if step > 0 => 0,
        None => count - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_index_moves_within_bounds() {
        assert_eq!(wrap_index(0, 1, 3), 1);
        assert_eq!(wrap_index(2, -1, 3), 1);
    }

    #[test]
    fn wrap_index_wraps_at_both_ends() {
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(0, -1, 3), 2);
    }

    #[test]
    fn wrap_index_single_item_stays_put() {
        assert_eq!(wrap_index(0, 1, 1), 0);
        assert_eq!(wrap_index(0, -1, 1), 0);
    }

    #[test]
    fn wrap_index_overshoot_restarts_instead_of_modulo() {
        // +2 from the last slide lands on 0, not on 1
        assert_eq!(wrap_index(3, 2, 4), 0);
        assert_eq!(wrap_index(1, -3, 4), 3);
    }

    #[test]
    fn wrap_index_stale_index_lands_in_range() {
        assert_eq!(wrap_index(7, -1, 3), 0);
        assert_eq!(wrap_index(7, 1, 3), 0);
    }

    #[test]
    fn new_table_starts_at_zero() {
        let table = SlideIndexTable::default();
        assert_eq!(table.group_count(), DEFAULT_GROUP_COUNT);
        assert!((0..DEFAULT_GROUP_COUNT).all(|g| table.current(g) == Ok(0)));
    }

    #[test]
    fn unknown_group_is_reported() {
        let mut table = SlideIndexTable::new(2);
        assert_eq!(table.current(2), Err(CarouselError::UnknownGroup { group: 2, groups: 2 }));
        assert!(table.reset(5).is_err());
    }
}
