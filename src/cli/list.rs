use crate::display::display_menu;
use crate::models::{list_problems as discover, UserConfig};
use super::fail;

pub fn list_problems(user_config: &UserConfig) {
    match discover(&user_config.problems_root) {
        Ok(problems) => display_menu(&problems),
        Err(e) => fail(e),
    }
}
