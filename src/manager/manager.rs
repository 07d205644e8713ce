use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

use log::debug;

use super::managererror::ManagerError;

/// Mutable registry used while loading. Names are unique.
pub struct ManagerBuilder<V: ?Sized> {
    map: HashMap<String, Arc<V>>
}

impl<V: ?Sized> ManagerBuilder<V> {
    pub fn new() -> ManagerBuilder<V> {
        ManagerBuilder { map: HashMap::new() }
    }

    pub fn insert(&mut self, name: String, value: Arc<V>) -> Result<(), ManagerError> {
        if self.map.contains_key(&name) {
            return Err(ManagerError::DuplicateNameError(name));
        }
        self.map.insert(name, value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn build(self) -> FrozenManager<V> {
        FrozenManager { map: self.map }
    }
}

impl<V: ?Sized> Default for ManagerBuilder<V> {
    fn default() -> Self {
        ManagerBuilder::new()
    }
}

/// Read-only registry produced by [`ManagerBuilder::build`]. `get` hands
/// out clones of the stored `Arc`, so every lookup of a name yields the
/// same object.
pub struct FrozenManager<V: ?Sized> {
    map: HashMap<String, Arc<V>>
}

impl<V: ?Sized> FrozenManager<V> {
    pub fn empty() -> FrozenManager<V> {
        FrozenManager { map: HashMap::new() }
    }

    pub fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Loads objects of type `V` from JSON into a registry. `S` carries any
/// already-loaded registries the objects refer to.
pub trait IManager<V: ?Sized, S> {
    fn insert_obj_from_json(&self,
                            builder: &mut ManagerBuilder<V>,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError>;

    fn insert_obj_from_json_vec(&self,
                                builder: &mut ManagerBuilder<V>,
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {
        for json_value in json_vec.iter() {
            self.insert_obj_from_json(builder, json_value.clone(), supports)?;
        }
        Ok(())
    }

    fn load(&self,
            json_vec: &[serde_json::Value],
            supports: &S) -> Result<FrozenManager<V>, ManagerError> {
        let mut builder = ManagerBuilder::new();
        self.insert_obj_from_json_vec(&mut builder, json_vec, supports)?;
        debug!("loaded {} objects", builder.len());
        Ok(builder.build())
    }

    /// Reads either a single object or an array of objects.
    fn from_reader<R: Read>(&self,
                            reader: R,
                            supports: &S) -> Result<FrozenManager<V>, ManagerError> {
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        match json_value {
            serde_json::Value::Array(json_vec) => self.load(&json_vec, supports),
            other => self.load(&[other], supports)
        }
    }
}
