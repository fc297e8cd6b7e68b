pub mod assembler;
pub mod hostname;
