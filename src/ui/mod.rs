//! Console surface
//!
//! Line prompting for new values and the greeting printed once a value is resolved.

pub mod greeting;
pub mod input;

pub use greeting::greeting;
pub use input::{ConsoleInput, InputSource, ScriptedInput};
