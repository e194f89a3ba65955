pub mod binomial;
pub use binomial::*;

pub mod category;
pub use category::*;

pub mod draw;
pub use draw::*;

pub mod outlook;
pub use outlook::*;

pub mod player;
pub use player::*;

pub mod villain;
pub use villain::*;

pub mod windows;
pub use windows::*;
