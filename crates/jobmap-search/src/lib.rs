pub mod aggregate;
pub mod client;
pub mod error;
pub mod filters;
pub mod geo;
pub mod job;
pub mod normalize;
pub mod runner;
pub mod session;
pub mod types;

pub use aggregate::{aggregate, AggregateOptions, SearchOutcome, SearchRequest, SearchStatus};
pub use client::{JobProvider, JobProviderClient};
pub use error::{ProviderError, RequestError};
pub use filters::{build_filter_params, format_job_type, FilterCatalog, FilterParam, FilterSelection};
pub use job::{CompanyMetadata, Coordinates, Job, JobCategory};
pub use normalize::normalize_job;
pub use runner::{run_location_query, LocationResult, SearchFailure};
pub use session::{SearchSession, SearchState, SearchTicket};
pub use types::JobSearchResponse;
