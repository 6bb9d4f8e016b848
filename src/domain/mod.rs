pub mod article;
pub mod state;

pub use article::{Article, ArticleRef, FeedSection};
pub use state::{ReadLog, SavedQueue};
