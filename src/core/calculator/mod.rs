//! Rule-checking engine: pure computations over the in-memory month.
//! Nothing here prints; see `core::report` for presentation.

pub mod day;
pub mod month;
