pub mod employee;
pub mod job;
pub mod matching;
