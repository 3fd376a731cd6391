pub mod app_config;
pub mod capability;
pub mod category;
pub mod config;
pub mod object_id;
pub mod questions;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use capability::{
    Classification, ClassifiedItem, ClassifyError, FeedbackStore, ImageClassifier, ItemStore,
    NearbyFinder, StoreError,
};
pub use category::{categorize, Category};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use questions::questions_for;
pub use types::{Facility, FeedbackRecord, ItemRecord, Question, Recommendation};
