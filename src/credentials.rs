use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use tracing::debug;

pub const ENV_APP_ID: &str = "SPEECH_APP_ID";
pub const ENV_API_KEY: &str = "SPEECH_API_KEY";
pub const ENV_API_SECRET: &str = "SPEECH_API_SECRET";

/// Account credentials issued by the speech platform.
///
/// Deserializable from any serde format, so it can sit inside the caller's
/// own configuration file.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub app_id: String,
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(
        app_id: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Credentials {
            app_id: app_id.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Reads `SPEECH_APP_ID`, `SPEECH_API_KEY` and `SPEECH_API_SECRET`.
    pub fn from_env() -> Result<Self> {
        Credentials::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let get = |name: &'static str| lookup(name).ok_or(Error::MissingEnv(name));
        let credentials = Credentials {
            app_id: get(ENV_APP_ID)?,
            api_key: get(ENV_API_KEY)?,
            api_secret: get(ENV_API_SECRET)?,
        };
        debug!(app_id = %credentials.app_id, "loaded credentials from environment");
        Ok(credentials)
    }
}

// keep the secret out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_deserialize() {
        let json = r#"{"app_id": "5d2f27b0", "api_key": "key", "api_secret": "secret"}"#;
        let credentials: Credentials = serde_json::from_str(json).unwrap();
        assert_eq!(credentials, Credentials::new("5d2f27b0", "key", "secret"));

        let missing = r#"{"app_id": "5d2f27b0", "api_key": "key"}"#;
        assert!(serde_json::from_str::<Credentials>(missing).is_err());
    }

    #[test]
    fn test_from_lookup() {
        let mut env = HashMap::new();
        env.insert(ENV_APP_ID, "app".to_string());
        env.insert(ENV_API_KEY, "key".to_string());
        let lookup = |env: HashMap<&'static str, String>| {
            move |name: &'static str| env.get(name).cloned()
        };

        match Credentials::from_lookup(lookup(env.clone())) {
            Err(Error::MissingEnv(name)) => assert_eq!(name, ENV_API_SECRET),
            other => panic!("unexpected: {:?}", other),
        }

        env.insert(ENV_API_SECRET, "secret".to_string());
        let credentials = Credentials::from_lookup(lookup(env)).unwrap();
        assert_eq!(credentials, Credentials::new("app", "key", "secret"));
    }

    #[test]
    fn test_debug_hides_secret() {
        let credentials = Credentials::new("app", "key", "very-secret");
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("app"));
        assert!(!printed.contains("very-secret"));
    }
}
