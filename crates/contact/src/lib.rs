mod command;
mod compose;
mod delivery;
mod input;
mod result;

pub use command::*;
pub use compose::*;
pub use delivery::*;
pub use input::*;
pub use result::*;

pub mod form;
