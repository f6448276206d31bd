pub mod movegen;
pub mod movelist;
