use crate::DataDump;

pub const DEFAULT_STORAGE_KEY: &str = "data";

const SEED_JSON: &str = include_str!("seed.json");

/// The comment set shown when nothing was persisted yet
pub fn seed() -> DataDump {
    serde_json::from_str(SEED_JSON).expect("bundled seed dataset is not valid")
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    /// Key the whole state is persisted under
    pub storage_key: String,

    /// State used when storage holds nothing usable
    pub seed: DataDump,
}

impl Default for StoreConfig {
    fn default() -> StoreConfig {
        StoreConfig {
            storage_key: String::from(DEFAULT_STORAGE_KEY),
            seed: seed(),
        }
    }
}
