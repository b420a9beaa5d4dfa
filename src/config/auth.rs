//! Authentication header building for outbound requests.

use super::credentials::CredentialStatus;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// `Authorization: Bearer` header for the catalog API.
///
/// Returns `None` when no key is configured; the request then goes out
/// unauthenticated and the API reports the failure.
pub fn bearer_header(credential: &CredentialStatus) -> Option<AuthHeader> {
    credential.secret().map(|key| {
        (
            "Authorization".to_string(),
            format!("Bearer {}", key.expose()),
        )
    })
}

/// Project and key headers for the Appwrite REST API.
pub fn appwrite_headers(project_id: &str, credential: &CredentialStatus) -> Vec<AuthHeader> {
    let mut headers = vec![("X-Appwrite-Project".to_string(), project_id.to_string())];
    if let Some(key) = credential.secret() {
        headers.push(("X-Appwrite-Key".to_string(), key.expose().to_string()));
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecureString;

    #[test]
    fn test_bearer_header() {
        let credential = CredentialStatus::Configured(SecureString::new("token-456".to_string()));
        let (name, value) = bearer_header(&credential).unwrap();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer token-456");
    }

    #[test]
    fn test_missing_key_has_no_bearer() {
        let credential = CredentialStatus::Unconfigured {
            reason: "catalog.api_key is not set".to_string(),
        };
        assert!(bearer_header(&credential).is_none());
    }

    #[test]
    fn test_appwrite_headers_without_key() {
        let credential = CredentialStatus::Unconfigured {
            reason: "trending.api_key is not set".to_string(),
        };
        let headers = appwrite_headers("proj", &credential);
        assert_eq!(
            headers,
            vec![("X-Appwrite-Project".to_string(), "proj".to_string())]
        );
    }

    #[test]
    fn test_appwrite_headers_with_key() {
        let credential = CredentialStatus::Configured(SecureString::new("k".to_string()));
        let headers = appwrite_headers("proj", &credential);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[1], ("X-Appwrite-Key".to_string(), "k".to_string()));
    }
}
