mod task;

pub use crate::task::*;
