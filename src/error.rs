// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Payloads are plain strings so errors stay `Clone` and can travel inside
//! iced messages.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The catalog file could not be parsed.
    #[error("Catalog Error: {0}")]
    Catalog(String),

    /// An image could not be decoded.
    #[error("Image Error: {0}")]
    Image(String),

    /// A section the widget needs is absent from the catalog.
    #[error("Missing element: {0}")]
    MissingElement(&'static str),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
