//! Hosting-environment detection.
//!
//! The checklist on the home page derives its step states from the
//! platform's environment variables: the environment type, and whether a
//! session-storage service relationship has been configured. Relationship
//! data arrives as base64-encoded JSON; anything malformed falls back to
//! file-based sessions rather than erroring.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Relationship key that marks the session store as provisioned.
pub const SERVICE_RELATIONSHIP: &str = "redis_session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    pub environment_type: String,
    /// "redis" when the session service relationship exists, else "file".
    pub session_storage: String,
}

impl Default for EnvironmentInfo {
    fn default() -> Self {
        Self {
            environment_type: "local".to_string(),
            session_storage: "file".to_string(),
        }
    }
}

impl EnvironmentInfo {
    pub fn has_session_service(&self) -> bool {
        self.session_storage == "redis"
    }
}

/// Server function so detection runs where the platform variables actually
/// exist; the client receives the result over the server-fn transport.
#[server(FetchEnvironment)]
pub async fn fetch_environment() -> Result<EnvironmentInfo, ServerFnError> {
    Ok(EnvironmentInfo {
        environment_type: environment_type(),
        session_storage: session_storage_type(std::env::var("PLATFORM_RELATIONSHIPS").ok().as_deref()),
    })
}

/// Environment type from `PLATFORM_ENVIRONMENT_TYPE`; "local" when unset.
pub fn environment_type() -> String {
    std::env::var("PLATFORM_ENVIRONMENT_TYPE").unwrap_or_else(|_| "local".to_string())
}

/// Session storage backend implied by the raw relationships variable.
/// Absent, undecodable, or unparsable data all mean "file".
pub fn session_storage_type(raw_relationships: Option<&str>) -> String {
    let storage = match raw_relationships {
        Some(raw) => {
            let has_service = STANDARD
                .decode(raw)
                .ok()
                .and_then(|bytes| serde_json::from_slice::<serde_json::Value>(&bytes).ok())
                .is_some_and(|relationships| relationships.get(SERVICE_RELATIONSHIP).is_some());
            if has_service { "redis" } else { "file" }
        }
        None => "file",
    };
    storage.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(json: &str) -> String {
        STANDARD.encode(json)
    }

    #[test]
    fn missing_relationships_mean_file_sessions() {
        assert_eq!(session_storage_type(None), "file");
    }

    #[test]
    fn configured_service_relationship_means_redis() {
        let raw = encode(r#"{"redis_session": [{"host": "redis.internal"}]}"#);
        assert_eq!(session_storage_type(Some(&raw)), "redis");
    }

    #[test]
    fn other_relationships_do_not_count() {
        let raw = encode(r#"{"postgres_db": [{"host": "db.internal"}]}"#);
        assert_eq!(session_storage_type(Some(&raw)), "file");
    }

    #[test]
    fn malformed_data_falls_back_to_file() {
        assert_eq!(session_storage_type(Some("not base64!!!")), "file");
        assert_eq!(session_storage_type(Some(&encode("not json"))), "file");
    }

    #[test]
    fn default_info_is_local_with_file_sessions() {
        let info = EnvironmentInfo::default();
        assert_eq!(info.environment_type, "local");
        assert!(!info.has_session_service());
    }
}
