pub const DEFAULT_GROUP_COUNT: usize = 10;    // Groups preset in a fresh index table

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Default frames per second

pub const FIT_RATIO: f32 = 0.9;               // Share of a column a slide may fill
pub const COLUMN_PADDING: f32 = 8.0;          // Gap between group columns (pixels)
pub const LABEL_FONT_SIZE: i32 = 20;

pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
