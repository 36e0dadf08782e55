use crate::Result;
use model::Snowflake;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Config {
    pub server_addr: String,
    /// Hex encoded Ed25519 key from the application's settings page.
    pub public_key: String,
    pub application_id: Snowflake,
    pub bot_token: String,
    /// Owner-only commands are denied to everyone when unset.
    pub owner_id: Option<Snowflake>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub sentry_dsn: Option<String>,
    #[serde(default)]
    pub json_log: bool,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        envy::from_env().map_err(Into::into)
    }
}

fn default_api_base() -> String {
    "https://discord.com/api/v10".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(extra: &[(&str, &str)]) -> Vec<(String, String)> {
        [
            ("SERVER_ADDR", "0.0.0.0:8080"),
            ("PUBLIC_KEY", "ab"),
            ("APPLICATION_ID", "508391840525975553"),
            ("BOT_TOKEN", "token"),
        ]
        .iter()
        .chain(extra)
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_defaults() {
        let config: Config = envy::from_iter(vars(&[])).unwrap();

        assert_eq!(config.application_id, Snowflake(508391840525975553));
        assert_eq!(config.api_base, "https://discord.com/api/v10");
        assert!(config.owner_id.is_none());
        assert!(config.sentry_dsn.is_none());
        assert!(!config.json_log);
    }

    #[test]
    fn test_overrides() {
        let config: Config = envy::from_iter(vars(&[
            ("OWNER_ID", "217617036749176833"),
            ("JSON_LOG", "true"),
        ]))
        .unwrap();

        assert_eq!(config.owner_id, Some(Snowflake(217617036749176833)));
        assert!(config.json_log);
    }

    #[test]
    fn test_missing_required() {
        let vars: Vec<(String, String)> = vec![("SERVER_ADDR".to_owned(), "0.0.0.0:80".to_owned())];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
