mod consumption;
mod energy_system;
mod vessels;
mod voyage;

pub use consumption::*;
pub use energy_system::*;
pub use vessels::*;
pub use voyage::*;
