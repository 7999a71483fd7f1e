//! Producer capabilities invoked on cache misses.
//!
//! A producer is a caller-owned capability that computes fresh data when no
//! valid cached value exists — typically a wrapper around a slow API call or
//! an expensive computation. The cache calls it synchronously, at most once
//! per operation, and never retries; a producer failure propagates to the
//! caller unchanged.

use serde_json::{Map, Value};

/// Failure raised by a producer, passed through to the caller unchanged.
pub type ProducerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// JSON object payload produced and served by the cache.
pub type JsonMap = Map<String, Value>;

/// Capability yielding fresh text for a cache miss.
///
/// Any closure of type `Fn() -> Result<String, ProducerError>` is a
/// `StringProducer` through the blanket impl.
pub trait StringProducer {
    /// Produce the fresh value.
    ///
    /// # Errors
    ///
    /// Whatever the producer's own failure mode is; the cache surfaces it
    /// verbatim.
    fn produce(&self) -> Result<String, ProducerError>;
}

/// Capability yielding a fresh JSON object for a cache miss.
///
/// Any closure of type `Fn() -> Result<JsonMap, ProducerError>` is a
/// `JsonProducer` through the blanket impl.
pub trait JsonProducer {
    /// Produce the fresh value.
    ///
    /// # Errors
    ///
    /// Whatever the producer's own failure mode is; the cache surfaces it
    /// verbatim.
    fn produce(&self) -> Result<JsonMap, ProducerError>;
}

impl<F> StringProducer for F
where
    F: Fn() -> Result<String, ProducerError>,
{
    fn produce(&self) -> Result<String, ProducerError> {
        self()
    }
}

impl<F> JsonProducer for F
where
    F: Fn() -> Result<JsonMap, ProducerError>,
{
    fn produce(&self) -> Result<JsonMap, ProducerError> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_string_producer() {
        let produce = || -> Result<String, ProducerError> { Ok("fresh".to_owned()) };
        let producer: &dyn StringProducer = &produce;
        assert_eq!(producer.produce().unwrap(), "fresh");
    }

    #[test]
    fn test_closure_is_a_json_producer() {
        let produce = || -> Result<JsonMap, ProducerError> {
            let mut map = JsonMap::new();
            map.insert("a".to_owned(), Value::String("1".to_owned()));
            Ok(map)
        };
        let producer: &dyn JsonProducer = &produce;
        let map = producer.produce().unwrap();
        assert_eq!(map.get("a"), Some(&Value::String("1".to_owned())));
    }

    #[test]
    fn test_producer_failure_keeps_its_message() {
        let produce = || -> Result<String, ProducerError> { Err("backing service down".into()) };
        let err = produce.produce().unwrap_err();
        assert_eq!(err.to_string(), "backing service down");
    }
}
