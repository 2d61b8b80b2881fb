use crate::{ApiError, ServiceState};
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use census_core::AdminCredentials;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("credentials file IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("credentials file parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(
        "credentials file {} not found; pass --allow-default-credentials to use the built-in pair",
        .0.display()
    )]
    Missing(PathBuf),
}

/// Loads the admin pair from `path`.
///
/// A missing file is a startup error unless `allow_default` is set, in
/// which case the well-known development pair is used instead.
pub fn load_admin_credentials(
    path: &Path,
    allow_default: bool,
) -> Result<AdminCredentials, CredentialsError> {
    if !path.exists() {
        if allow_default {
            tracing::warn!(
                path = %path.display(),
                "credentials file missing; using the built-in default pair"
            );
            return Ok(AdminCredentials::insecure_default());
        }
        return Err(CredentialsError::Missing(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Rejects any request whose Basic credentials do not match the configured
/// pair. Layered over every route, the root endpoint included.
pub async fn require_basic_auth(
    State(state): State<ServiceState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(decode_basic_credentials);

    match presented {
        Some((login, password)) if state.credentials.authorize(&login, &password) => {
            Ok(next.run(request).await)
        }
        _ => Err(ApiError::Unauthorized),
    }
}

fn decode_basic_credentials(header: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (login, password) = decoded.split_once(':')?;
    Some((login.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_well_formed_basic_header() {
        let header = format!("Basic {}", STANDARD.encode("admin:P4ssword"));
        assert_eq!(
            decode_basic_credentials(&header),
            Some(("admin".to_string(), "P4ssword".to_string()))
        );
    }

    #[test]
    fn scheme_matching_is_case_insensitive() {
        let header = format!("basic {}", STANDARD.encode("admin:P4ssword"));
        assert!(decode_basic_credentials(&header).is_some());
    }

    #[test]
    fn password_may_contain_colons() {
        let header = format!("Basic {}", STANDARD.encode("admin:a:b:c"));
        assert_eq!(
            decode_basic_credentials(&header),
            Some(("admin".to_string(), "a:b:c".to_string()))
        );
    }

    #[test]
    fn rejects_non_basic_schemes() {
        assert!(decode_basic_credentials("Bearer abc123").is_none());
        assert!(decode_basic_credentials("Basic").is_none());
    }

    #[test]
    fn rejects_undecodable_headers() {
        assert!(decode_basic_credentials("Basic !!!").is_none());
        let no_colon = format!("Basic {}", STANDARD.encode("admin"));
        assert!(decode_basic_credentials(&no_colon).is_none());
    }

    #[test]
    fn loads_credentials_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin_credentials.json");
        fs::write(&path, r#"{"login": "ops", "password": "hunter2"}"#).unwrap();
        let pair = load_admin_credentials(&path, false).unwrap();
        assert_eq!(pair, AdminCredentials::new("ops", "hunter2"));
    }

    #[test]
    fn missing_file_is_an_error_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(
            load_admin_credentials(&path, false),
            Err(CredentialsError::Missing(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_when_explicitly_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let pair = load_admin_credentials(&path, true).unwrap();
        assert_eq!(pair, AdminCredentials::insecure_default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin_credentials.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            load_admin_credentials(&path, false),
            Err(CredentialsError::Parse(_))
        ));
    }
}
