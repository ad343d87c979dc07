//! Token filters run over a tokenizer's output inside an analyzer.
//!
//! Only [`LowercaseFilter`] is normalizing; it is the one filter applied to
//! wildcard, prefix, fuzzy and range terms, which never go through the
//! tokenizer.

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub trait Filter: Send + Sync {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    fn name(&self) -> &'static str;

    /// True when the filter maps each token's characters and nothing else.
    fn is_normalizing(&self) -> bool {
        false
    }
}

pub mod lowercase;
pub mod stop;
pub mod synonym_graph;

pub use self::lowercase::LowercaseFilter;
pub use self::stop::StopFilter;
pub use self::synonym_graph::SynonymGraphFilter;
