mod menu;
mod state;

pub use state::{apply_action, AppState, InputAction, Scene, TableAction};
