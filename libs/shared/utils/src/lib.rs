pub mod clock;
pub mod format;
pub mod latency;
pub mod test_utils;

pub use clock::{Clock, SystemClock};
pub use latency::simulate_latency;
