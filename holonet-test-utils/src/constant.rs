//! Shared values for test fixtures.

/// ID of the user favorites operations act on in tests.
///
/// The first user inserted by [`TestBuilder::with_mock_user`](crate::TestBuilder::with_mock_user)
/// receives this ID.
pub const TEST_FAVORITES_USER_ID: i32 = 1;

/// Placeholder stored in the password column of mock users.
pub static TEST_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA";

/// Climate given to mock planets.
pub static TEST_PLANET_CLIMATE: &str = "arid";

/// Dimension given to mock planets.
pub static TEST_PLANET_DIMENSION: &str = "10465";

/// Species given to mock characters.
pub static TEST_CHARACTER_SPECIES: &str = "Human";
