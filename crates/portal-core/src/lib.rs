pub mod constants;
pub mod controls;
pub mod glass;
pub mod nav;
pub mod orbs;
pub mod status;

pub use controls::*;
pub use glass::*;
pub use nav::*;
pub use orbs::*;
pub use status::*;
