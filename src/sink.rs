use http::header::{HeaderMap, HeaderName, HeaderValue};
use indexmap::IndexMap;
use tracing::warn;

/// Headers recorded by the [`Headers`] sink, in the order they were set.
pub type Headers = IndexMap<String, String>;

/// Write-only destination for response headers.
///
/// Setting a name that is already present replaces its value; CORS response
/// headers are single-valued.
pub trait ResponseSink {
    fn set_header(&mut self, name: &'static str, value: &str);
}

impl<T: ResponseSink + ?Sized> ResponseSink for &mut T {
    fn set_header(&mut self, name: &'static str, value: &str) {
        (**self).set_header(name, value);
    }
}

impl ResponseSink for Headers {
    fn set_header(&mut self, name: &'static str, value: &str) {
        if let Some(index) = self
            .keys()
            .position(|existing| existing.eq_ignore_ascii_case(name))
        {
            if let Some((_, slot)) = self.get_index_mut(index) {
                *slot = value.to_string();
            }
            return;
        }
        self.insert(name.to_string(), value.to_string());
    }
}

impl ResponseSink for HeaderMap {
    fn set_header(&mut self, name: &'static str, value: &str) {
        let header_name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(header_name) => header_name,
            Err(err) => {
                warn!(header = name, error = %err, "dropping CORS header with an invalid name");
                return;
            }
        };
        match HeaderValue::from_str(value) {
            Ok(header_value) => {
                self.insert(header_name, header_value);
            }
            Err(err) => {
                warn!(header = name, error = %err, "dropping CORS header with an invalid value");
            }
        }
    }
}

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;
