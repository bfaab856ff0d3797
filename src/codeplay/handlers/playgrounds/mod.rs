//! Realm playground registry endpoints.
//!
//! A playground entry maps a pygments language tag to an external URL
//! template so clients can build "open this snippet in a playground" links.
//! Realms own their entries outright: every query is scoped by the caller's
//! realm, and an id that resolves under another realm is reported with the
//! same "Invalid playground" error as an id that does not exist at all, so
//! entries cannot be enumerated across realms.
//!
//! Entries are immutable once created; the only write operations are create
//! and delete. Deletes are permanent, with no soft-delete state.
//!
//! This module is split into small route-focused files plus a shared storage
//! layer. The handler module only parses inputs, applies the gates, and maps
//! the high-level flow; `validator` owns the pure field checks and `storage`
//! owns the SQL and response shaping.
//!
//! Flow Overview:
//! 1) Resolve the session into a realm principal.
//! 2) Require an elevated realm role for create/delete.
//! 3) Trim fields and run every validator, collecting per-field messages.
//! 4) Perform realm-scoped inserts, lookups, and deletes.

pub mod entries;
mod storage;
pub mod types;
mod validator;

const MAX_NAME_LENGTH: usize = 64;
const MAX_PYGMENTS_LANGUAGE_LENGTH: usize = 40;
const MAX_URL_PREFIX_LENGTH: usize = 200;
