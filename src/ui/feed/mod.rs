mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::FeedIntent;
pub use reducer::FeedReducer;
pub use screen::FeedScreen;
pub use state::FeedState;
