use std::{error::Error, fmt};

pub type GeoconnexResult<T> = Result<T, GeoconnexError>;

#[derive(Debug)]
pub enum GeoconnexError {
    /// Transport failure or a non-success HTTP status from a Geoconnex endpoint.
    Http(reqwest::Error),
    /// The query endpoint answered 2xx with a body that is not JSON.
    InvalidJson {
        body: String,
        source: serde_json::Error,
    },
    /// The JSON parsed but does not follow the SPARQL results layout.
    MalformedResults(serde_json::Error),
    /// A binding lacks a variable the shaper needs.
    MissingVariable(String),
}

impl GeoconnexError {
    /// HTTP status code when the failure came from a non-success response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for GeoconnexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => write!(f, "Geoconnex request failed: {err}"),
            Self::InvalidJson { body, .. } => {
                write!(f, "Invalid JSON response from Geoconnex: {body}")
            }
            Self::MalformedResults(err) => {
                write!(f, "malformed SPARQL results from Geoconnex: {err}")
            }
            Self::MissingVariable(variable) => {
                write!(f, "SPARQL binding is missing variable `{variable}`")
            }
        }
    }
}

impl Error for GeoconnexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::InvalidJson { source, .. } | Self::MalformedResults(source) => Some(source),
            Self::MissingVariable(_) => None,
        }
    }
}

impl From<reqwest::Error> for GeoconnexError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}
