pub mod state;

pub use state::{initialize, AppState};
