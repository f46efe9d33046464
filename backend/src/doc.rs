//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the JSON endpoint, the health probes and the schema
//! wrappers that describe domain types without coupling them to utoipa.
//! The document backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::schemas::{
    AggregateResultSchema, ArticleSchema, CountryInfoSchema, ExchangeRatesSchema,
    NewsDigestSchema, UserProfileSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Profile aggregator API",
        description = "Aggregates a random user, their country, exchange rates and news.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::profile::get_profile,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AggregateResultSchema,
        UserProfileSchema,
        CountryInfoSchema,
        ExchangeRatesSchema,
        NewsDigestSchema,
        ArticleSchema,
        ErrorResponse
    )),
    tags(
        (name = "profile", description = "Aggregated random profile"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the registered paths and schema field structure.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const AGGREGATE_SCHEMA_NAME: &str = "crate.domain.AggregateResult";
    const RATES_SCHEMA_NAME: &str = "crate.domain.ExchangeRates";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn registers_profile_and_health_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/api/profile", "/health/ready", "/health/live"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn aggregate_schema_lists_the_four_slices() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let aggregate = schemas.get(AGGREGATE_SCHEMA_NAME).expect("aggregate schema");

        for field in ["user", "country", "exchangeRates", "news"] {
            assert_object_schema_has_field(aggregate, field);
        }
    }

    #[test]
    fn rates_schema_exposes_note() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let rates = schemas.get(RATES_SCHEMA_NAME).expect("rates schema");

        assert_object_schema_has_field(rates, "note");
        assert_object_schema_has_field(rates, "usd");
    }

    #[test]
    fn error_response_schema_has_only_error() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error = schemas.get("ErrorResponse").expect("error schema");
        match error {
            RefOr::T(Schema::Object(obj)) => {
                assert_eq!(obj.properties.keys().collect::<Vec<_>>(), vec!["error"]);
            }
            _ => panic!("expected Object schema"),
        }
    }
}
