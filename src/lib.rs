//! Per-group image carousels: one wrapping slide index per group, driven
//! through whatever surface implements [`UiLayer`].

pub mod carousel;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod state;
pub mod ui;

pub use carousel::{SlideIndexTable, wrap_index};
pub use error::{CarouselError, Result};
pub use state::Direction;
pub use ui::UiLayer;
