use std::env;

/// Process-scoped configuration, read once at startup and injected into the
/// services that need it. The signing secret, database connection, Stripe key,
/// and listen port are required: a missing value aborts startup with a clear
/// message instead of degrading silently.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub access_token_secret: String,
    pub stripe_secret_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: required("SERVER_PORT")
                .parse()
                .expect("SERVER_PORT must be a valid port number"),
            mongodb_uri: required("MONGODB_URI"),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "storefront".to_string()),
            access_token_secret: required("ACCESS_TOKEN_SECRET"),
            stripe_secret_key: required("STRIPE_SECRET_KEY"),
        }
    }
}

fn required(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("{} must be set", name))
}
