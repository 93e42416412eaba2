#![deny(warnings)]
#![deny(rust_2018_idioms)]

pub mod consumption;
pub mod energy_system;
pub mod power;
pub mod reference;

pub use consumption::*;
pub use energy_system::*;
pub use power::*;
pub use reference::*;
