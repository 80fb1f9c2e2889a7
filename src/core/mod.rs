pub mod easing;
pub mod particles;
pub mod progress;
pub mod storage;
pub mod tilt;
pub mod viewport;

pub use easing::*;
pub use particles::*;
pub use progress::*;
pub use storage::*;
pub use tilt::*;
pub use viewport::*;
