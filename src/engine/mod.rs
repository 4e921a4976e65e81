mod controller;
mod messages;
mod state;

pub use controller::{ReactiveController, overview_lineup};
pub use messages::SelectionEvent;
pub use state::SelectionState;
