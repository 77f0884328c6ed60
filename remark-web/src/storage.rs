use anyhow::anyhow;
use gloo_storage::{LocalStorage, Storage as _};
use remark_client::Storage;

/// The browser's `window.localStorage`
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| anyhow!("reading {key:?} from local storage: {e:?}"))
    }

    fn store(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| anyhow!("writing {key:?} to local storage: {e:?}"))
    }
}
