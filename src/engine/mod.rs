pub mod action;
pub use action::*;

pub mod calculation;
pub use calculation::*;

pub mod decision;
pub use decision::*;

pub mod stakes;
pub use stakes::*;
