pub mod constants;
pub mod field;
pub mod lifecycle;
pub mod paint;
pub mod palette;
pub mod particle;
pub mod pointer;

pub use field::*;
pub use lifecycle::*;
pub use paint::*;
pub use palette::*;
pub use particle::*;
pub use pointer::*;
