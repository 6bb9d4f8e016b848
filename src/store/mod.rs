pub mod flat_file;

use crate::app::Result;
use crate::config::Config;
use crate::domain::{ReadLog, SavedQueue};

pub use flat_file::FlatFileStore;

pub trait Store {
    // Startup loads
    fn load_feeds(&self) -> Result<Vec<String>>;
    fn load_read_log(&self) -> Result<ReadLog>;
    fn load_saved(&self) -> Result<SavedQueue>;
    fn load_config(&self) -> Result<Config>;

    // State mutations
    fn append_read(&self, url: &str) -> Result<()>;
    fn append_saved(&self, url: &str) -> Result<()>;
    fn rewrite_saved(&self, links: &[String]) -> Result<()>;
}
