mod create_user;
mod get_favorites;
mod get_users;

use super::*;
