pub mod agent;
pub mod boards;
pub mod driver;
pub mod environment;
pub mod error;
pub mod memory;
pub mod params;
pub mod planning;
pub mod tile;

pub use agent::{AgentMode, Explorer};
pub use driver::{Episode, RunReport, StepOutcome};
pub use environment::{Board, WorldView};
pub use error::MazeError;
pub use planning::Move;
