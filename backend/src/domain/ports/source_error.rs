//! Error contract shared by every upstream source port.

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling an upstream HTTP source.
    pub enum SourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "upstream transport failed: {message}",
        /// The call exceeded its bounded timeout.
        Timeout { message: String } =>
            "upstream request timed out: {message}",
        /// The upstream answered with a non-success status.
        Status { status: u16, message: String } =>
            "HTTP {status} {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "upstream response decode failed: {message}",
        /// The upstream answered successfully but had no usable records.
        Empty { message: String } =>
            "upstream returned no results: {message}",
    }
}

#[cfg(test)]
mod tests {
    //! Message formatting checks for surfaced errors.
    use super::*;

    #[test]
    fn status_message_mirrors_http_status_line() {
        let err = SourceError::status(404_u16, "Not Found: {\"status\":404}");
        assert_eq!(err.to_string(), "HTTP 404 Not Found: {\"status\":404}");
    }

    #[test]
    fn empty_message_names_the_lookup() {
        let err = SourceError::empty("country 'Atlantis'");
        assert_eq!(
            err.to_string(),
            "upstream returned no results: country 'Atlantis'"
        );
    }
}
