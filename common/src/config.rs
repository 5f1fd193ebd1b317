use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};
use hocon::{Hocon, HoconLoader};

/// Anything loadable from a [`ConfigLoader`]. Implementations fall back to
/// their own defaults for absent keys.
pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}

/// Reads options from a HOCON file. Environment variables of the same name
/// take precedence over file values.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let env = std::env::vars().collect::<HashMap<_, _>>();

        let hocon = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("Failed to find or load config file at: {:?}", path))?
            .hocon()?;

        Ok(Self { hocon, env })
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        T::load(self)
    }

    pub fn get_usize(&self, name: &str) -> Option<usize> {
        if let Some(value) = self.env.get(name) {
            return value.parse().ok();
        }

        match &self.hocon[name] {
            Hocon::Integer(v) => usize::try_from(*v).ok(),
            Hocon::String(v) => v.parse().ok(),
            _ => None,
        }
    }

    pub fn get_f32(&self, name: &str) -> Option<f32> {
        if let Some(value) = self.env.get(name) {
            return value.parse().ok();
        }

        match &self.hocon[name] {
            Hocon::Real(v) => Some(*v as f32),
            Hocon::Integer(v) => Some(*v as f32),
            Hocon::String(v) => v.parse().ok(),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        if let Some(value) = self.env.get(name) {
            return value.parse().ok();
        }

        match &self.hocon[name] {
            Hocon::Boolean(v) => Some(*v),
            Hocon::String(v) => v.parse().ok(),
            _ => None,
        }
    }

    pub fn get_string(&self, name: &str) -> Option<String> {
        if let Some(value) = self.env.get(name) {
            return Some(value.clone());
        }

        match &self.hocon[name] {
            Hocon::String(v) => Some(v.clone()),
            Hocon::Integer(v) => Some(v.to_string()),
            Hocon::Real(v) => Some(v.to_string()),
            Hocon::Boolean(v) => Some(v.to_string()),
            _ => None,
        }
    }
}
