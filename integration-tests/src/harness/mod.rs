pub mod tracing;
pub mod workspace;

pub use self::tracing::{CapturedEvent, capture_events};
pub use self::workspace::{TestWorkspace, fixture_path};
