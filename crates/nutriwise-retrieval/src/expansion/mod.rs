//! Query expansion: multi-perspective reformulation via a completion model.

pub mod reformulator;

pub use reformulator::{parse_line_list, QueryReformulator};
