pub mod candidate;
pub mod carrier;
pub mod config;
pub mod geometry;
pub mod plot;
pub mod report;
pub mod sampler;
pub mod scenario;
pub mod search;
pub mod window;

pub use candidate::{ARRIVAL_TOLERANCE, Candidate, MotionState, Target};
pub use carrier::Carrier;
pub use geometry::Point;
pub use scenario::Scenario;
pub use search::{Arrival, DropSearch, SearchResult, Termination};
