mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::LeaderboardIntent;
pub use reducer::LeaderboardReducer;
pub use screen::LeaderboardScreen;
pub use state::LeaderboardState;
