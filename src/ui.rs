/// The display surface a carousel drives.
///
/// Items are owned by the implementor and looked up again on every call, so a
/// group may grow or shrink between two advances. `Item` is a cheap handle
/// (an id, a slot index) rather than the displayed object itself.
pub trait UiLayer {
    type Item;

    /// Items of `group` in display order. Unknown groups yield no items.
    fn group_items(&self, group: usize) -> Vec<Self::Item>;

    fn set_visibility(&mut self, item: &Self::Item, visible: bool);
}
