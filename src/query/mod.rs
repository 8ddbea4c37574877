pub mod context;
pub mod discovery;
pub mod executor;
pub mod pool;
pub mod ranker;
pub mod results;
pub mod scorer;

pub use context::{Candidate, ScratchContext};
pub use executor::{SearchMode, SearchRuntime};
pub use pool::ContextPool;
pub use ranker::{rank, SortStrategy};
pub use results::SearchResult;
pub use scorer::Scorer;
