/// Which way a carousel control moves the visible slide.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Direction {
    Next,     // "next" control, step +1
    Previous, // "previous" control, step -1
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}
