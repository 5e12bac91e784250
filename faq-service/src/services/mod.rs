pub mod matcher;
pub mod prompt;
pub mod providers;

pub use matcher::{FaqMatch, MATCH_CUTOFF, best_match, find_best_answer};
pub use prompt::build_prompt;
