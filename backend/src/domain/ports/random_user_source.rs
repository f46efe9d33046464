//! Driven port for the random user generator.

use async_trait::async_trait;

use super::SourceError;

/// One generated person, reduced to the fields the profile consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomUser {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Gender as reported upstream.
    pub gender: String,
    /// Age in years.
    pub age: u32,
    /// URL of the large portrait.
    pub picture: String,
    /// City of residence.
    pub city: String,
    /// Country name; the lookup key for country metadata.
    pub country: String,
    /// Street name.
    pub street_name: String,
    /// Street number.
    pub street_number: i64,
}

/// Port for fetching one random person.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RandomUserSource: Send + Sync {
    /// Fetch the first generated person.
    async fn fetch_random_user(&self) -> Result<RandomUser, SourceError>;
}

/// Fixture implementation returning the same person on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureRandomUserSource;

#[async_trait]
impl RandomUserSource for FixtureRandomUserSource {
    async fn fetch_random_user(&self) -> Result<RandomUser, SourceError> {
        Ok(RandomUser {
            first_name: "Louise".to_owned(),
            last_name: "Girard".to_owned(),
            gender: "female".to_owned(),
            age: 34,
            picture: "https://randomuser.me/api/portraits/women/44.jpg".to_owned(),
            city: "Lyon".to_owned(),
            country: "France".to_owned(),
            street_name: "Rue de la Republique".to_owned(),
            street_number: 12,
        })
    }
}
