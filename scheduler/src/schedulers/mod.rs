//! The scheduling policies
//!
//! Each policy lives in its own file and implements [`crate::Scheduler`].

mod fcfs;
pub use fcfs::FcfsScheduler;

mod sjf;
pub use sjf::SjfScheduler;

mod priority;
pub use priority::PriorityScheduler;

mod round_robin;
pub use round_robin::RoundRobinScheduler;
