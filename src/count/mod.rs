pub mod counter;
pub mod partition;

pub use counter::{CountOverflow, WordCounter, TOTAL_LABEL};
pub use partition::count_partitioned;
