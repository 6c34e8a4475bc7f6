/// Loads service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; each field maps to the
/// upper-cased env var of the same name (`db_host` reads `DB_HOST`).
/// Use `#[serde(default = "...")]` for optional variables.
pub trait Config: Sized + serde::de::DeserializeOwned {
    /// Read the process environment.
    fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Read from an explicit set of `(NAME, value)` pairs instead of the process environment.
    fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
