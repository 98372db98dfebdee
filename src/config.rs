use clap::Parser;

/// Backend settings, from flags or environment.
#[derive(Debug, Clone, Parser)]
#[clap(name = "tamil_sangam", version, about = "Tamil literary posts API")]
pub struct Config {
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[clap(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Posts are kept in memory (seeded) when absent.
    #[clap(long, env = "MONGODB_URI")]
    pub mongodb_uri: Option<String>,

    #[clap(long = "db", env = "MONGODB_DB", default_value = "tamil_sangam")]
    pub db_name: String,

    /// `tracing-subscriber` filter directive.
    #[clap(long, env = "RUST_LOG", default_value = "info")]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_everything() {
        let c = Config::parse_from([
            "tamil_sangam",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--mongodb-uri",
            "mongodb://localhost:27017",
            "--db",
            "sangam_test",
            "--log",
            "debug",
        ]);

        assert_eq!(c.host, "127.0.0.1");
        assert_eq!(c.port, 8080);
        assert_eq!(c.mongodb_uri.as_deref(), Some("mongodb://localhost:27017"));
        assert_eq!(c.db_name, "sangam_test");
        assert_eq!(c.log, "debug");
    }
}
