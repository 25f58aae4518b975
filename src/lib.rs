//!
//! # Introduction
//!
//! This library turns the data of a block committed by a sharded
//! ledger node into records ready for an indexing pipeline.
//!
//! For every commit it builds one `Block` record, with its mini block
//! summaries, epoch-start economics and size accounting, and the ordered
//! list of `Transaction` records of its normal, invalid and reward
//! mini blocks.
//!
//! Marshaling, hashing, address encoding and logging are collaborators
//! injected at construction, see `codec` and `logging`.
//!
//! # Example
//!
//! ```rust
//! use covalent_indexer::{create_data_processor, IndexerConfig};
//! use std::path::Path;
//!
//! let config = IndexerConfig::load(Path::new("indexer.toml")).unwrap();
//! let processor = create_data_processor(&config).unwrap();
//!
//! // `args` is handed over by the node on every block commit
//! let result = processor.process_data(&args).unwrap();
//! println!("{} transactions", result.transactions.len());
//! ```
//!

pub(crate) mod api;
pub mod codec;
pub mod config;
pub mod ledger;
pub mod logging;
pub mod process;
pub mod schema;

#[doc(inline)]
pub use crate::api::*;
pub use crate::config::IndexerConfig;
pub use crate::ledger::ArgsSaveBlockData;
pub use crate::schema::BlockResult;
