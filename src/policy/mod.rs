//! Policy trait and baseline implementations.

pub mod goal_seeking;
pub mod random;
pub mod trait_;

pub use goal_seeking::GoalSeekingPolicy;
pub use random::RandomPolicy;
pub use trait_::Policy;
