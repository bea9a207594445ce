//! Journey generation adapters.

mod disabled;
mod mock_generator;
mod openai_generator;

pub use disabled::DisabledJourneyGenerator;
pub use mock_generator::{MockJourneyGenerator, RecordedRequest};
pub use openai_generator::{OpenAiConfig, OpenAiJourneyGenerator};
