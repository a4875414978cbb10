//! CLI command implementations

pub mod add;
pub mod board;
pub mod generate;
pub mod generate_all;
pub mod inspect;
pub mod json_output;
pub mod validate;
