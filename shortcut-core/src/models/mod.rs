//! Contains models shared by the matrix builder, the evolution engine and the result assembler.

mod location;
pub use self::location::*;

mod matrix;
pub use self::matrix::*;

mod tour;
pub use self::tour::*;
