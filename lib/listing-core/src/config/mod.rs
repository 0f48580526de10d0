use std::path::Path;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_yaml")]
use figment::providers::{Format, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod test;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Parsing error: `{0}`")]
    GeneralParsingError(String),

    #[error("Invalid page size bounds: default {default_page_size}, max {max_page_size}")]
    InvalidPageSize {
        default_page_size: u32,
        max_page_size: u32,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "max_page_size")]
    pub max_page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn max_page_size() -> u32 {
    MAX_PAGE_SIZE
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(figment::providers::Data<Yaml>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }
}

impl ListingConfig {
    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        Self::parse(configs.into_iter().map(InputFormat::yaml_str))
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_files(
        files: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> Result<Self, ConfigParsingError> {
        Self::parse(files.into_iter().map(InputFormat::yaml_file))
    }

    /// Later inputs override earlier ones, `LISTING_` environment variables override all
    pub fn parse(inputs: impl IntoIterator<Item = InputFormat>) -> Result<Self, ConfigParsingError> {
        #[allow(unused_mut)]
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("LISTING_").split("__").lowercase(false));
        }

        let config = figment
            .extract::<ListingConfig>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigParsingError> {
        if self.default_page_size == 0
            || self.max_page_size == 0
            || self.default_page_size > self.max_page_size
        {
            return Err(ConfigParsingError::InvalidPageSize {
                default_page_size: self.default_page_size,
                max_page_size: self.max_page_size,
            });
        }

        Ok(())
    }
}
