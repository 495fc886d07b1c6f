//! The resolution engine.
//!
//! One generic [`Resolver`] serves both entity kinds; the [`EntityAdapter`]
//! it carries supplies field extraction and boost weights.
//!
//! ```text
//! query ─► describe ─► embed ─► score ─► rank ─► gate ─┬─► Accepted
//!                                                      └─► arbitrate ─┬─► Arbitrated
//!                                                                     └─► Fallback
//! ```
//!
//! Every stage reports to the configured [`EventSink`](crate::events::EventSink).
//! Failures are absorbed: the caller always gets a [`Resolution`] and can
//! inspect [`MatchDecision`] for what happened.
//!
//! [`EntityAdapter`]: crate::adapter::EntityAdapter

pub mod engine;
pub mod error;
pub mod types;


pub use engine::Resolver;
pub use error::ResolveError;
pub use types::{FallbackReason, InvalidInput, MatchDecision, OracleStage, Resolution};

use crate::adapter::{ItemAdapter, PartnerAdapter};

/// Resolves invoice sellers to business partners.
pub type PartnerResolver = Resolver<PartnerAdapter>;

/// Resolves invoice lines to catalog items.
pub type ItemResolver = Resolver<ItemAdapter>;
