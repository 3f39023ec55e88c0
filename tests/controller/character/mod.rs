mod get_character;
mod get_characters;

use super::*;
