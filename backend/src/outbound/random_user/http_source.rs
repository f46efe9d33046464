//! Reqwest-backed random user generator adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::dto::RandomUserResponseDto;
use crate::domain::ports::{RandomUser, RandomUserSource, SourceError};
use crate::outbound::http_support::{build_client, get_json};

/// Public endpoint of the random user generator.
pub const DEFAULT_RANDOM_USER_URL: &str = "https://randomuser.me/api/";

/// Random user source that performs one GET per profile request.
pub struct RandomUserHttpSource {
    client: Client,
    endpoint: Url,
}

impl RandomUserHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint,
        })
    }
}

#[async_trait]
impl RandomUserSource for RandomUserHttpSource {
    async fn fetch_random_user(&self) -> Result<RandomUser, SourceError> {
        let response: RandomUserResponseDto =
            get_json(&self.client, self.endpoint.clone(), "random_user").await?;
        response
            .into_first_user()
            .ok_or_else(|| SourceError::empty("random user generator returned no results"))
    }
}

#[cfg(test)]
mod tests {
    //! Decoding coverage for random user payloads.

    use super::*;
    use crate::outbound::http_support::decode_json;

    fn decode(body: &str) -> Result<Option<RandomUser>, SourceError> {
        decode_json::<RandomUserResponseDto>(body.as_bytes())
            .map(RandomUserResponseDto::into_first_user)
    }

    #[test]
    fn decodes_first_result_into_domain_user() {
        let body = r#"{
            "results": [
                {
                    "gender": "male",
                    "name": { "title": "Mr", "first": "Arman", "last": "Nurlanov" },
                    "location": {
                        "street": { "number": 4821, "name": "Dostyk Avenue" },
                        "city": "Almaty",
                        "state": "Almaty",
                        "country": "Kazakhstan",
                        "postcode": 50000
                    },
                    "dob": { "date": "1990-04-01T00:00:00.000Z", "age": 35 },
                    "picture": {
                        "large": "https://randomuser.me/api/portraits/men/12.jpg",
                        "thumbnail": "https://randomuser.me/api/portraits/thumb/men/12.jpg"
                    }
                },
                {
                    "gender": "female",
                    "name": { "first": "Second", "last": "Person" },
                    "location": {
                        "street": { "number": 1, "name": "Ignored" },
                        "city": "Nowhere",
                        "country": "Nowhere"
                    },
                    "dob": { "age": 20 },
                    "picture": { "large": "https://example.invalid/2.jpg" }
                }
            ],
            "info": { "seed": "abc", "results": 2 }
        }"#;

        let user = decode(body).expect("decodes").expect("first result");
        assert_eq!(user.first_name, "Arman");
        assert_eq!(user.country, "Kazakhstan");
        assert_eq!(user.street_name, "Dostyk Avenue");
        assert_eq!(user.street_number, 4821);
        assert_eq!(user.age, 35);
    }

    #[test]
    fn empty_results_decode_to_none() {
        assert_eq!(decode(r#"{ "results": [] }"#).expect("decodes"), None);
    }

    #[test]
    fn missing_required_fields_are_decode_errors() {
        let body = r#"{ "results": [ { "gender": "male" } ] }"#;
        let error = decode(body).expect_err("incomplete user must fail");
        assert!(matches!(error, SourceError::Decode { .. }));
    }
}
