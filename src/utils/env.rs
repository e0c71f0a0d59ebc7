use std::collections::HashMap;
use std::{env, fmt, io};

use heck::ToShoutySnakeCase;

/// N8rEnv allows us to mock environment variables while
/// running tests. That way we can run our tests in parallel,
/// and our local development environment will not have unintended
/// side effects on our tests.
#[derive(Debug, Clone)]
pub struct N8rEnv {
    mock_store: Option<HashMap<String, String>>,
}

impl Default for N8rEnv {
    fn default() -> N8rEnv {
        N8rEnv::new()
    }
}

impl N8rEnv {
    /// creates a new environment variable store
    pub fn new() -> N8rEnv {
        let mock_store = if cfg!(test) {
            Some(HashMap::new())
        } else {
            None
        };

        N8rEnv { mock_store }
    }

    /// returns the value of the environment variable if it exists
    pub fn get(&self, key: N8rEnvKey) -> io::Result<Option<String>> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let result = match &self.mock_store {
            Some(mock_store) => Ok(mock_store.get(&key_str).map(|v| v.to_owned())),
            None => match env::var(&key_str) {
                Ok(data) => Ok(Some(data)),
                Err(env::VarError::NotPresent) => Ok(None),
                Err(env::VarError::NotUnicode(_)) => Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "The value of the environment variable \"{}\" is not valid Unicode.",
                        &key_str
                    ),
                )),
            },
        }?;

        if let Some(result) = &result {
            tracing::debug!("read environment variable ${} = {}", &key_str, result);
        } else {
            tracing::trace!("could not find ${}", &key_str);
        }

        Ok(result)
    }

    /// sets an environment variable to a value in the mock store
    #[cfg(test)]
    pub fn insert(&mut self, key: N8rEnvKey, value: &str) {
        if let Some(mock_store) = &mut self.mock_store {
            mock_store.insert(key.to_string(), value.into());
        }
    }
}

/// N8rEnvKey defines all of the environment variables
/// that are respected by n8r. Each environment variable is prefixed
/// with `N8R_` and the suffix is the name of the key defined here.
/// For example, `N8rEnvKey::ConfigHome.to_string()` becomes `N8R_CONFIG_HOME`
#[derive(Debug, Copy, Clone)]
pub enum N8rEnvKey {
    ConfigHome,
    BaseUrl,
}

impl fmt::Display for N8rEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{:?}", self).to_shouty_snake_case();
        fmt.write_str(&format!("N8R_{}", &dbg))
    }
}
