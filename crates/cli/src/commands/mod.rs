pub mod detect;
pub mod inspect;
pub mod label;
pub mod util;

pub use detect::*;
pub use inspect::*;
pub use label::*;
pub use util::*;
