//! Purpose: Type-directed dispatch table for decode/encode strategies.
//! Exports: `Strategy`, `Decoders`.
//! Role: Selects a registered strategy by declared target type, else defers to the host.
//! Invariants: Lookup is a `TypeKey` hash lookup; node shape never influences which strategy runs.
//! Invariants: Unregistered targets decode exactly as the host's generic decoder would.
//! Invariants: The table is immutable during decode; shared references are safe across threads.

use crate::core::error::{Error, ErrorKind};
use crate::core::materialize::{JsonHost, Materializer};
use crate::core::sequence::{SequenceOptions, ShapeTolerantSequence};
use crate::core::target::TypeKey;
use crate::json::parse;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::{Any, type_name};
use std::collections::HashMap;

/// Object-safe form of a strategy so different targets can share one table.
pub trait Strategy<M>: Send + Sync {
    /// Declared target this strategy decodes; also its key in `Decoders`.
    fn target(&self) -> TypeKey;

    fn decode_any(&self, node: Value, host: &M) -> Result<Box<dyn Any>, Error>;

    fn encode_any(&self, value: &dyn Any, host: &M) -> Result<Value, Error>;
}

impl<T, M> Strategy<M> for ShapeTolerantSequence<T>
where
    T: DeserializeOwned + Serialize + 'static,
    M: Materializer,
{
    fn target(&self) -> TypeKey {
        ShapeTolerantSequence::<T>::target()
    }

    fn decode_any(&self, node: Value, host: &M) -> Result<Box<dyn Any>, Error> {
        let items = self.decode(node, host)?;
        Ok(Box::new(items))
    }

    fn encode_any(&self, value: &dyn Any, host: &M) -> Result<Value, Error> {
        let items = value.downcast_ref::<Vec<T>>().ok_or_else(|| {
            Error::new(ErrorKind::Internal)
                .with_message("encode value does not match strategy target")
                .with_target(type_name::<Vec<T>>())
        })?;
        self.encode(items, host)
    }
}

pub struct Decoders<M = JsonHost> {
    host: M,
    strategies: HashMap<TypeKey, Box<dyn Strategy<M>>>,
}

impl Decoders<JsonHost> {
    pub fn new() -> Self {
        Self::with_host(JsonHost::new())
    }
}

impl Default for Decoders<JsonHost> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Materializer + 'static> Decoders<M> {
    pub fn with_host(host: M) -> Self {
        Self {
            host,
            strategies: HashMap::new(),
        }
    }

    pub fn host(&self) -> &M {
        &self.host
    }

    /// Registers a strategy, replacing any earlier one for the same target.
    pub fn register(&mut self, strategy: impl Strategy<M> + 'static) -> &mut Self {
        let target = strategy.target();
        let replaced = self.strategies.insert(target, Box::new(strategy)).is_some();
        tracing::debug!(target: "shape_tolerant", strategy_target = %target, replaced, "registered decode strategy");
        self
    }

    pub fn register_sequence<T>(&mut self) -> &mut Self
    where
        T: DeserializeOwned + Serialize + 'static,
    {
        self.register(ShapeTolerantSequence::<T>::new())
    }

    pub fn register_sequence_with<T>(&mut self, options: SequenceOptions) -> &mut Self
    where
        T: DeserializeOwned + Serialize + 'static,
    {
        self.register(ShapeTolerantSequence::<T>::with_options(options))
    }

    pub fn handles(&self, target: &TypeKey) -> bool {
        self.strategies.contains_key(target)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn decode<U: DeserializeOwned + 'static>(&self, node: Value) -> Result<U, Error> {
        let target = TypeKey::of::<U>();
        let Some(strategy) = self.find(&target) else {
            return self.host.decode_as::<U>(node);
        };
        tracing::debug!(target: "shape_tolerant", strategy_target = %target, "dispatching to strategy");
        let decoded = strategy.decode_any(node, &self.host)?;
        decoded.downcast::<U>().map(|boxed| *boxed).map_err(|_| {
            Error::new(ErrorKind::Internal)
                .with_message("strategy produced a value of the wrong type")
                .with_target(target.name())
        })
    }

    /// Parses `input` as one JSON document and decodes it as `U`.
    pub fn decode_str<U: DeserializeOwned + 'static>(&self, input: &str) -> Result<U, Error> {
        let node = parse::from_str::<Value>(input)
            .map_err(|err| parse::to_error(err, type_name::<U>()))?;
        self.decode(node)
    }

    pub fn encode<U: Serialize + 'static>(&self, value: &U) -> Result<Value, Error> {
        let target = TypeKey::of::<U>();
        match self.find(&target) {
            Some(strategy) => strategy.encode_any(value, &self.host),
            None => self.host.encode_as(value),
        }
    }

    fn find(&self, target: &TypeKey) -> Option<&dyn Strategy<M>> {
        self.strategies.get(target).map(|strategy| &**strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::{Decoders, Strategy};
    use crate::core::error::{Error, ErrorKind};
    use crate::core::materialize::{JsonHost, Materializer};
    use crate::core::sequence::{ScalarPolicy, SequenceOptions};
    use crate::core::target::TypeKey;
    use serde_json::{Value, json};
    use std::any::Any;

    #[test]
    fn registered_sequence_is_lenient() {
        let mut decoders = Decoders::new();
        decoders.register_sequence::<u32>();

        let from_object: Vec<u32> = decoders.decode(json!({"a": 1, "b": 2})).expect("object");
        assert_eq!(from_object, vec![1, 2]);

        let from_null: Vec<u32> = decoders.decode(json!(null)).expect("null");
        assert!(from_null.is_empty());
    }

    #[test]
    fn unregistered_sequence_falls_through_to_generic_decode() {
        let mut decoders = Decoders::new();
        decoders.register_sequence::<u32>();

        assert!(!decoders.handles(&TypeKey::of::<Vec<String>>()));
        let err = decoders
            .decode::<Vec<String>>(json!({"a": "x"}))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Data);

        let plain: u32 = decoders.decode(json!(5)).expect("plain");
        assert_eq!(plain, 5);
    }

    #[test]
    fn re_registering_replaces_options() {
        let mut decoders = Decoders::new();
        decoders.register_sequence::<u32>();
        decoders.register_sequence_with::<u32>(
            SequenceOptions::new().with_scalar(ScalarPolicy::Reject),
        );
        assert_eq!(decoders.len(), 1);

        let err = decoders.decode::<Vec<u32>>(json!("x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn each_target_gets_its_own_slot() {
        let mut decoders = Decoders::with_host(JsonHost::new());
        assert!(decoders.is_empty());
        decoders
            .register_sequence::<u32>()
            .register_sequence::<String>()
            .register_sequence::<u32>();
        assert_eq!(decoders.len(), 2);
        assert!(decoders.handles(&TypeKey::sequence_of::<u32>()));
        assert!(decoders.handles(&TypeKey::sequence_of::<String>()));

        let direct: u8 = decoders.host().decode_as(json!(7)).expect("host decode");
        assert_eq!(direct, 7);
    }

    #[test]
    fn encode_uses_array_shape() {
        let mut decoders = Decoders::new();
        decoders.register_sequence::<u32>();
        let value = decoders.encode(&vec![3u32, 1, 2]).expect("encode");
        assert_eq!(value, json!([3, 1, 2]));

        let fallback = decoders.encode(&"plain").expect("encode");
        assert_eq!(fallback, json!("plain"));
    }

    #[test]
    fn decode_str_reports_parse_errors() {
        let mut decoders = Decoders::new();
        decoders.register_sequence::<u32>();
        let err = decoders.decode_str::<Vec<u32>>(r#"{"a":"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);

        let ok: Vec<u32> = decoders.decode_str(r#"{"a":1,"b":null}"#).expect("decode");
        assert_eq!(ok, vec![1]);
    }

    struct Mislabeled;

    impl Strategy<JsonHost> for Mislabeled {
        fn target(&self) -> TypeKey {
            TypeKey::of::<Vec<u8>>()
        }

        fn decode_any(&self, _node: Value, _host: &JsonHost) -> Result<Box<dyn Any>, Error> {
            Ok(Box::new("not a vec".to_string()))
        }

        fn encode_any(&self, _value: &dyn Any, _host: &JsonHost) -> Result<Value, Error> {
            Ok(Value::Null)
        }
    }

    #[test]
    fn wrong_strategy_output_is_internal_error() {
        let mut decoders = Decoders::new();
        decoders.register(Mislabeled);
        let err = decoders.decode::<Vec<u8>>(json!([1])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
