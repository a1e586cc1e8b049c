#[derive(Clone, Debug, serde::Deserialize)]
pub struct StaticConfiguration {
    pub storage: StorageConfiguration,
    pub log_level: String,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct StorageConfiguration {
    pub default_file: String,
}

impl StorageConfiguration {
    pub fn default_path(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(&self.default_file)
    }
}

/// Defaults, then `configuration.yaml` if present, then `REGISTRY__*` environment variables.
pub fn get_static_configuration() -> Result<StaticConfiguration, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("log_level", "warn")?
        .set_default("storage.default_file", "people.csv")?
        .add_source(
            config::File::new("configuration.yaml", config::FileFormat::Yaml).required(false)
        )
        .add_source(
            config::Environment::with_prefix("REGISTRY").separator("__")
        )
        .build()?;

    settings.try_deserialize::<StaticConfiguration>()
}
