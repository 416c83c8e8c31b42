use std::{fs::read_to_string, path::Path};

use url::Url;

use crate::{
    ConfigLoadError,
    models::sources::{EnvConfig, FileDatabaseConfig},
};

/// Pick the connection URL: `DATABASE_URL`, then `DATABASE_URL_FILE`, then
/// the file's `database.url`. A file URL without a password picks one up
/// from `DATABASE_PASSWORD` or a password file.
pub fn resolve_database_url(
    env: &EnvConfig,
    file_database: &FileDatabaseConfig,
) -> Result<Option<String>, ConfigLoadError> {
    if let Some(url) = env.database_url.clone() {
        return Ok(Some(url));
    }

    if let Some(path) = env.database_url_file.as_ref()
        && let Some(url) = read_secret_file(path)?
    {
        return Ok(Some(url));
    }

    let Some(stored_url) = file_database.url.as_deref().map(str::trim) else {
        return Ok(None);
    };
    if stored_url.is_empty() {
        return Ok(None);
    }

    let mut parsed = Url::parse(stored_url)
        .map_err(|source| ConfigLoadError::InvalidDatabaseUrl { source })?;
    if parsed.password().is_none()
        && let Some(password) = resolve_database_password(env, file_database)?
    {
        parsed
            .set_password(Some(&password))
            .map_err(|_| ConfigLoadError::InvalidDatabasePassword)?;
    }
    Ok(Some(parsed.to_string()))
}

pub fn resolve_database_password(
    env: &EnvConfig,
    file_database: &FileDatabaseConfig,
) -> Result<Option<String>, ConfigLoadError> {
    if let Some(password) = env.database_password.clone() {
        return Ok(Some(password));
    }

    for path in [
        env.database_password_file.as_ref(),
        file_database.password_file.as_ref(),
    ]
    .into_iter()
    .flatten()
    {
        if let Some(secret) = read_secret_file(path)? {
            return Ok(Some(secret));
        }
    }

    Ok(None)
}

pub fn read_secret_file(path: &Path) -> Result<Option<String>, ConfigLoadError> {
    let contents = read_to_string(path).map_err(|source| ConfigLoadError::SecretFileIo {
        path: path.to_path_buf(),
        source,
    })?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn environment_url_wins() {
        let env = EnvConfig {
            database_url: Some("postgres://env/gallery".into()),
            ..EnvConfig::default()
        };
        let file = FileDatabaseConfig {
            url: Some("postgres://file/gallery".into()),
            ..FileDatabaseConfig::default()
        };
        assert_eq!(
            resolve_database_url(&env, &file).unwrap().as_deref(),
            Some("postgres://env/gallery")
        );
    }

    #[test]
    fn file_url_picks_up_password_file() {
        let mut secret = tempfile::NamedTempFile::new().unwrap();
        writeln!(secret, "s3cret").unwrap();

        let file = FileDatabaseConfig {
            url: Some("postgres://gallery@db:5432/gallery".into()),
            password_file: Some(secret.path().to_path_buf()),
            max_connections: None,
        };
        let url = resolve_database_url(&EnvConfig::default(), &file)
            .unwrap()
            .unwrap();
        assert_eq!(url, "postgres://gallery:s3cret@db:5432/gallery");
    }

    #[test]
    fn missing_secret_file_is_an_error() {
        let env = EnvConfig {
            database_url_file: Some("/nonexistent/gallery/url".into()),
            ..EnvConfig::default()
        };
        let err = resolve_database_url(&env, &FileDatabaseConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigLoadError::SecretFileIo { .. }));
    }
}
