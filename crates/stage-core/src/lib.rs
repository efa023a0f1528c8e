pub mod asset;
pub mod constants;
pub mod dolly;
pub mod error;
pub mod follower;
pub mod oscillator;
pub mod pointer;
pub mod scene;
pub mod scheduler;
pub mod stage;

pub use asset::*;
pub use constants::*;
pub use dolly::*;
pub use error::*;
pub use follower::*;
pub use oscillator::*;
pub use pointer::*;
pub use scene::*;
pub use scheduler::*;
pub use stage::*;
