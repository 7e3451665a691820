use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub db_max_connections: u32,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
        env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env_or("PORT", 8080),
            db_url: Self::get_env("DATABASE_URL"),
            db_max_connections: Self::get_env_or("DB_MAX_CONNECTIONS", 10),
        }
    }
}
