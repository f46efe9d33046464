//! Profile aggregation handler.
//!
//! ```text
//! GET /api/profile
//! ```

use actix_web::{get, web};
use tracing::info;

use crate::domain::AggregateResult;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::schemas::AggregateResultSchema;
use crate::inbound::http::state::HttpState;

/// Aggregate a random person with their country, rates and news.
///
/// Degraded rate or news lookups still answer 200 with a `note` on the
/// affected slice. Only user or country failures are fatal.
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Aggregated profile", body = AggregateResultSchema),
        (status = 500, description = "User or country lookup failed", body = ErrorResponse)
    ),
    tags = ["profile"],
    operation_id = "getProfile"
)]
#[get("/api/profile")]
pub async fn get_profile(state: web::Data<HttpState>) -> ApiResult<web::Json<AggregateResult>> {
    let result = state.profile.fetch_profile().await?;
    info!(
        country = %result.country.name,
        articles = result.news.articles.len(),
        "profile aggregated"
    );
    Ok(web::Json(result))
}

#[cfg(test)]
mod tests {
    //! Handler coverage with a mocked profile query.

    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{
        CountryRecord, CurrencyRecord, MockProfileQuery, NewsArticleRecord, RandomUser,
    };
    use crate::domain::{
        CountryInfo, Error, ExchangeRates, NewsDigest, RateValue, UserProfile,
    };
    use crate::middleware::Trace;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    fn sample_result() -> AggregateResult {
        let user = UserProfile::from(RandomUser {
            first_name: "Louise".into(),
            last_name: "Girard".into(),
            gender: "female".into(),
            age: 34,
            picture: "https://randomuser.me/api/portraits/women/44.jpg".into(),
            city: "Lyon".into(),
            country: "France".into(),
            street_name: "Rue de la Republique".into(),
            street_number: 12,
        });
        let country = CountryInfo::from_record(
            CountryRecord {
                common_name: Some("France".into()),
                capitals: vec!["Paris".into()],
                languages: vec!["French".into()],
                currencies: vec![CurrencyRecord {
                    code: "EUR".into(),
                    name: Some("Euro".into()),
                }],
                flag_png: Some("https://flagcdn.com/w320/fr.png".into()),
            },
            "France",
        );
        let exchange_rates = ExchangeRates {
            usd: RateValue::Rate(1.08),
            kzt: RateValue::Rate(1.1),
            ..ExchangeRates::unavailable(Some("EUR"))
        };
        let news = NewsDigest {
            query: "France".into(),
            articles: vec![
                NewsArticleRecord {
                    title: Some("France wins".into()),
                    url: Some("https://news.example/1".into()),
                    source_name: Some("Wire".into()),
                    image_url: None,
                }
                .into(),
            ],
            note: None,
        };
        AggregateResult {
            user,
            country,
            exchange_rates,
            news,
        }
    }

    async fn call(query: MockProfileQuery) -> (StatusCode, Value) {
        let state = HttpState::new(Arc::new(query));
        let app = test::init_service(
            App::new()
                .wrap(Trace)
                .app_data(web::Data::new(state))
                .service(get_profile),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/profile").to_request(),
        )
        .await;
        let status = res.status();
        let body = test::read_body_json(res).await;
        (status, body)
    }

    #[actix_web::test]
    async fn returns_the_aggregate_as_camel_case_json() {
        let mut query = MockProfileQuery::new();
        query
            .expect_fetch_profile()
            .times(1)
            .return_once(|| Ok(sample_result()));

        let (status, body) = call(query).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["fullAddress"], "Rue de la Republique 12");
        assert_eq!(body["country"]["currencyCode"], "EUR");
        assert_eq!(
            body["exchangeRates"],
            json!({ "base": "EUR", "usd": 1.08, "kzt": 1.1 })
        );
        assert_eq!(body["news"]["articles"][0]["image"], Value::Null);
        assert!(body["news"].get("note").is_none());
    }

    #[actix_web::test]
    async fn fatal_errors_answer_500_with_only_the_message() {
        let mut query = MockProfileQuery::new();
        query
            .expect_fetch_profile()
            .times(1)
            .return_once(|| Err(Error::upstream("random user lookup failed: timed out")));

        let (status, body) = call(query).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "random user lookup failed: timed out" })
        );
    }
}
