pub mod app;
pub mod background;
pub mod constants;
pub mod error;
pub mod field;
pub mod intensity;
pub mod surface;

pub use app::*;
pub use background::*;
pub use constants::*;
pub use error::OceanError;
pub use field::*;
pub use intensity::*;
pub use surface::*;
