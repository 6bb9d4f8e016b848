use std::path::PathBuf;
use std::sync::Arc;

use crate::aggregator::Aggregator;
use crate::app::error::Result;
use crate::config::Config;
use crate::extractor::{Extractor, ExtractorConfig};
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::store::flat_file::FlatFileStore;
use crate::store::Store;

pub struct AppContext {
    pub store: FlatFileStore,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub aggregator: Aggregator,
    pub extractor: Extractor,
    pub config: Config,
}

impl AppContext {
    pub fn new(dir: PathBuf) -> Result<Self> {
        let store = FlatFileStore::new(dir);
        let config = store.load_config()?;
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new());
        let aggregator = Aggregator::new(fetcher.clone());
        let extractor = Extractor::new(fetcher.clone(), ExtractorConfig::default());

        Ok(Self {
            store,
            fetcher,
            aggregator,
            extractor,
            config,
        })
    }
}
