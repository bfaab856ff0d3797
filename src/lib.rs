pub mod cli;
pub mod codeplay;
