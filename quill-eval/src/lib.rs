//! Tree-walking evaluator for the quill language.

pub mod error;
pub mod frame;
pub mod interpreter;

pub use error::EvalError;
pub use frame::Frame;
pub use interpreter::Interpreter;
