use thiserror::Error;

/// Failures while reading content from a [`ContentSource`](super::ContentSource).
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Content request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Content request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Malformed {document} content")]
    Decode {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn decode_error_reports_cause_once_in_chain() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let cause = source.to_string();
        let err = CmsError::Decode {
            document: "menus",
            source,
        };

        assert_eq!(err.to_string(), "Malformed menus content");
        assert_eq!(err.source().map(|s| s.to_string()), Some(cause));
    }
}
