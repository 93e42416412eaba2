#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod conversion;
mod domain;
pub mod error;

pub use conversion::*;
pub use domain::*;
pub use error::*;
