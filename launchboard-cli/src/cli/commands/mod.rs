pub mod boards;
pub mod duplicate;
pub mod generate;
pub mod plan;
pub mod push;
