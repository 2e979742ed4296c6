use std::{collections::HashMap, sync::Arc};

use log::debug;
use parking_lot::RwLock;

use crate::{Codable, DynCodec, Error, Result};

/// Key and value codecs of one collection.
#[derive(Debug, Clone)]
pub struct Serializers {
    pub key: Arc<dyn DynCodec>,
    pub value: Arc<dyn DynCodec>,
}

impl Serializers {
    pub fn new(key: impl DynCodec + 'static, value: impl DynCodec + 'static) -> Self {
        Self {
            key: Arc::new(key),
            value: Arc::new(value),
        }
    }

    /// Default codecs of `K` and `V`.
    pub fn of<K: Codable, V: Codable>() -> Self {
        Self::new(K::Codec::default(), V::Codec::default())
    }
}

/// Collection name to codec binding, filled in when tables are configured.
///
/// Lookups hand out `Arc`s, so the lock is never held while a codec runs.
#[derive(Debug, Default)]
pub struct Registry {
    collections: RwLock<HashMap<String, Serializers>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to the default codecs of `K` and `V`.
    pub fn register<K: Codable, V: Codable>(&self, name: &str) -> Result<Serializers> {
        self.register_with(name, Serializers::of::<K, V>())
    }

    pub fn register_with(&self, name: &str, serializers: Serializers) -> Result<Serializers> {
        let mut collections = self.collections.write();
        if collections.contains_key(name) {
            return Err(Error::AlreadyRegistered(name.to_owned()));
        }
        debug!(
            "{name}: registered key codec {} and value codec {}",
            serializers.key.value_type(),
            serializers.value.value_type()
        );
        collections.insert(name.to_owned(), serializers.clone());
        Ok(serializers)
    }

    pub fn get(&self, name: &str) -> Result<Serializers> {
        self.collections
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownCollection(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.collections.read().contains_key(name)
    }

    pub fn remove(&self, name: &str) -> Result<Serializers> {
        let serializers = self
            .collections
            .write()
            .remove(name)
            .ok_or_else(|| Error::UnknownCollection(name.to_owned()))?;
        debug!("{name}: codecs removed");
        Ok(serializers)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names = self.collections.read().keys().cloned().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.collections.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.read().is_empty()
    }
}
