//! Station selection core: product mapping, lenient record normalization,
//! geodesic ranking, and the search payloads.

pub mod app_config;
pub mod config;
pub mod distance;
pub mod error;
pub mod normalize;
pub mod product;
pub mod response;
pub mod search;
pub mod select;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use distance::{distance_km, Coordinate};
pub use error::{ConfigError, ErrorKind, SearchError};
pub use normalize::{has_store, station_coordinate, station_price};
pub use product::Product;
pub use response::{build_response, FailureResponse, SearchResult, StationResponse, StoreResponse};
pub use search::{search, try_search, SearchRequest, StationFeed};
pub use select::{select, Candidate, SearchMode, SelectionCriteria};
