pub mod comb;
pub mod shell;
