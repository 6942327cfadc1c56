use raylib::prelude::*;

use carousel::{SlideIndexTable, UiLayer};

use carousel::constants::*;
use crate::slide::Slide;

pub struct Group<T> {
    pub name: String,
    pub slides: Vec<Slide<T>>,
}

/// Handle to one slide of a [`Gallery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideHandle {
    pub group: usize,
    pub slot: usize,
}

/// All carousel groups of the window, laid out as equal columns.
pub struct Gallery<T> {
    groups: Vec<Group<T>>,
}

impl<T> Gallery<T> {
    pub fn new(groups: Vec<Group<T>>) -> Self {
        Self { groups }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    #[cfg(test)]
    pub fn visible_slots(&self, group: usize) -> Vec<usize> {
        self.groups
            .get(group)
            .map(|g| g.slides.iter().enumerate().filter(|(_, s)| s.visible).map(|(i, _)| i).collect())
            .unwrap_or_default()
    }
}

impl<T> UiLayer for Gallery<T> {
    type Item = SlideHandle;

    fn group_items(&self, group: usize) -> Vec<SlideHandle> {
        self.groups
            .get(group)
            .map(|g| (0..g.slides.len()).map(|slot| SlideHandle { group, slot }).collect())
            .unwrap_or_default()
    }

    fn set_visibility(&mut self, item: &SlideHandle, visible: bool) {
        if let Some(slide) = self.groups.get_mut(item.group).and_then(|g| g.slides.get_mut(item.slot)) {
            slide.visible = visible;
        }
    }
}

/// Screen area of column `index` out of `count` columns.
pub fn column_bounds(index: usize, count: usize, screen_width: f32, screen_height: f32) -> Rectangle {
    let width = screen_width / count.max(1) as f32;
    Rectangle::new(
        index as f32 * width + COLUMN_PADDING * 0.5,
        COLUMN_PADDING * 0.5,
        width - COLUMN_PADDING,
        screen_height - COLUMN_PADDING - LABEL_FONT_SIZE as f32 * 1.5,
    )
}

/// Column under horizontal position `x`, and whether `x` lies in its right half.
pub fn column_at(x: f32, count: usize, screen_width: f32) -> Option<(usize, bool)> {
    if count == 0 || x < 0.0 || x >= screen_width {
        return None;
    }
    let width = screen_width / count as f32;
    let index = ((x / width) as usize).min(count - 1);
    let right_half = x - index as f32 * width >= width * 0.5;
    Some((index, right_half))
}

impl Gallery<Texture2D> {
    pub fn draw(&self, d: &mut RaylibDrawHandle, table: &SlideIndexTable, focus: usize, screen_width: f32, screen_height: f32) {
        let count = self.groups.len();
        for (index, group) in self.groups.iter().enumerate() {
            let bounds = column_bounds(index, count, screen_width, screen_height);

            for slide in group.slides.iter() {
                slide.draw(d, bounds);
            }

            let frame = if index == focus { Color::GOLD } else { Color::DARKGRAY };
            d.draw_rectangle_lines(bounds.x as i32, bounds.y as i32, bounds.width as i32, bounds.height as i32, frame);

            let label = match (group.slides.len(), table.current(index)) {
                (0, _) => format!("{} (empty)", group.name),
                (len, Ok(current)) => format!("{} {}/{}", group.name, current + 1, len),
                (len, Err(_)) => format!("{} ?/{}", group.name, len),
            };
            d.draw_text(
                &label,
                bounds.x as i32,
                (bounds.y + bounds.height) as i32 + LABEL_FONT_SIZE / 4,
                LABEL_FONT_SIZE,
                Color::RAYWHITE,
            );
        }
    }
}
