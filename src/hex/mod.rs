pub mod area;
pub mod direction;
pub mod point;

pub use area::HexArea;
pub use direction::HexDirection;
pub use point::{HexCube, HexPoint, ScreenPoint};
