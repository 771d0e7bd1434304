mod axis;
pub use self::axis::*;

mod interleave;
pub use self::interleave::*;

mod morton;
pub use self::morton::*;

mod code;
pub use self::code::*;

mod helper;
pub use self::helper::*;

mod error;
pub use self::error::*;

pub mod number;
