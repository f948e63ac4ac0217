//! Domain layer: strong types with validation and invariants (no I/O).

pub mod method;
mod params;
mod request_ip;
mod validation;
mod value;

pub use params::{ParamValue, Params};
pub use request_ip::{RequestContext, detect_client_ip};
pub use validation::ValidationError;
pub use value::{ApiKey, Platform};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn platform_rejects_empty() {
        assert!(matches!(
            Platform::new(""),
            Err(ValidationError::Empty {
                field: Platform::FIELD
            })
        ));
    }

    #[test]
    fn every_alias_target_is_non_empty() {
        for (friendly, endpoint) in method::METHOD_ALIASES {
            assert!(!friendly.is_empty());
            assert!(!endpoint.is_empty());
        }
    }
}
