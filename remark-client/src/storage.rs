use std::collections::HashMap;

/// Key-value backend the comment store persists its state into
///
/// Values are whole JSON documents, replaced on every write.
pub trait Storage {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn store(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemoryStorage(HashMap<String, String>);

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage(HashMap::new())
    }

    pub fn with(key: &str, value: &str) -> MemoryStorage {
        let mut res = MemoryStorage::new();
        res.0.insert(String::from(key), String::from(value));
        res
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v as &str)
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.0.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.0.insert(String::from(key), String::from(value));
        Ok(())
    }
}
