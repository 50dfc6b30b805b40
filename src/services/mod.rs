pub mod codec;
pub mod filters;
pub mod show_service;

pub use codec::{make_response, parse_request};
pub use filters::{filter_drm, filter_has_episodes, FilterPipeline, ShowFilter};
pub use show_service::ShowService;
