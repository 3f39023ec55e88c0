
use holonet_test_utils::prelude::*;

/// Builder with favorite tables, the acting user, two planets and two characters
fn favorites_builder() -> TestBuilder {
    TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user()
        .with_mock_planet("Tatooine")
        .with_mock_planet("Hoth")
        .with_mock_character("Luke Skywalker", Some(1))
        .with_mock_character("Wampa", Some(2))
}
