mod point;
mod position;

pub use point::Point;
pub use position::CursorPosition;
