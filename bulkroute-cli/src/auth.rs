//! Credential loading for the route API.

use bulkroute_client::Credentials;
use bulkroute_types::ConfigError;
use config::{Config, File, FileFormat};
use std::path::Path;

/// Loads `user` and `pass` from a YAML file. `BULKROUTE_USER` and
/// `BULKROUTE_PASS` take precedence over the file.
///
/// Quote both values in the file. The YAML reader types plain scalars, so an
/// unquoted `pass: 0123` arrives as `123`.
pub fn load_credentials(path: &Path) -> Result<Credentials, ConfigError> {
    load_credentials_with_env(path, |key| std::env::var(key).ok())
}

fn load_credentials_with_env<F>(path: &Path, env: F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if !path.is_file() {
        return Err(ConfigError::NotFound { path: path.display().to_string() });
    }

    let parse_error =
        |e: config::ConfigError| ConfigError::ParseError { message: format!("{}: {}", path.display(), e) };

    // Only the two credential keys; other BULKROUTE_* variables belong to the CLI.
    let settings = Config::builder()
        .add_source(File::from(path).format(FileFormat::Yaml))
        .set_override_option("user", env("BULKROUTE_USER"))
        .map_err(parse_error)?
        .set_override_option("pass", env("BULKROUTE_PASS"))
        .map_err(parse_error)?
        .build()
        .map_err(parse_error)?;

    let credentials: Credentials = settings.try_deserialize().map_err(parse_error)?;

    if credentials.user.is_empty() {
        return Err(ConfigError::invalid(
            "user",
            format!("user not specified in {}", path.display()),
        ));
    }
    if credentials.pass.is_empty() {
        return Err(ConfigError::invalid(
            "pass",
            format!("pass not specified in {}", path.display()),
        ));
    }

    Ok(credentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn auth_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_user_and_pass() {
        let file = auth_file("user: 0f1e2d3c-guid\npass: api-key\n");

        let credentials = load_credentials(file.path()).unwrap();

        assert_eq!(credentials.user, "0f1e2d3c-guid");
        assert_eq!(credentials.pass, "api-key");
    }

    #[test]
    fn test_missing_file() {
        let err = load_credentials(Path::new("/nonexistent/.pobox-api-auth")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_missing_pass_is_rejected() {
        let file = auth_file("user: someone\n");

        let err = load_credentials(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError { ref field, .. } if field == "pass"));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let file = auth_file("user: [unterminated\n");

        let err = load_credentials(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_quoted_values_are_kept_verbatim() {
        let file = auth_file("user: \"0042\"\npass: \"0123\"\n");

        let credentials = load_credentials_with_env(file.path(), |_| None).unwrap();

        assert_eq!(credentials.user, "0042");
        assert_eq!(credentials.pass, "0123");
    }

    #[test]
    fn test_env_overrides_only_credential_keys() {
        let file = auth_file("user: from-file\npass: file-key\n");
        let env = |key: &str| match key {
            "BULKROUTE_PASS" => Some("env-key".to_string()),
            "BULKROUTE_URL" => Some("https://elsewhere.example/".to_string()),
            "BULKROUTE_AUTHFILE" => Some("/tmp/other".to_string()),
            _ => None,
        };

        let credentials = load_credentials_with_env(file.path(), env).unwrap();

        assert_eq!(credentials.user, "from-file");
        assert_eq!(credentials.pass, "env-key");
    }

    #[test]
    fn test_debug_hides_pass() {
        let file = auth_file("user: someone\npass: hunter2\n");

        let credentials = load_credentials(file.path()).unwrap();

        assert!(!format!("{credentials:?}").contains("hunter2"));
    }
}
