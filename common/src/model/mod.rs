pub mod column;
pub mod jobrequest;
