//! Autofocus module
//!
//! Drives the lens actuator to the position maximising a Laplacian sharpness
//! score. The search only sees a [`FocusOracle`]; in production that oracle
//! re-exposes the sensor for every probe.

mod oracle;
mod search;
pub mod types;


pub use oracle::{FocusOracle, SensorSharpness, laplacian_sharpness, sharpness_crop};
pub use search::AutoFocus;
pub use types::{FocusConfig, FocusReport};
