/// Listed issue information service interface
pub mod listed;
