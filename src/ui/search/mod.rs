mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use screen::SearchScreen;
pub use state::SearchState;
