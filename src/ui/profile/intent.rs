use crate::data::{Post, UserProfile};
use crate::ui::mvi::{Emission, Intent};

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    Profile(Emission<UserProfile>),
    Posts(Emission<Vec<Post>>),
    /// Profile was written successfully.
    Saved(UserProfile),
}

impl Intent for ProfileIntent {}
