//! Dial widgets.
//!
//! - [`Dial`]: Rotary dial driven by pointer angle, backed by a `KnobState`

mod dial;

pub use dial::{Dial, DialResponse};
