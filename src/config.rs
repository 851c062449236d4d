pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    /// Reads the only two knobs this service has: the listening port and the
    /// database file location.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid number.");
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:notes.db".to_string());
        Config { port, database_url }
    }
}
