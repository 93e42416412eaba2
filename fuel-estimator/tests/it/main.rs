#![deny(warnings)]
#![deny(rust_2018_idioms)]

pub mod energy_system;
pub mod helper;
