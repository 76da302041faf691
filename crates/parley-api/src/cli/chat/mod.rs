//! Interactive chat command.

mod compose;
mod input;
mod run;

pub use run::run;
