//! Serialization/deserialization of the persisted world document.
//!
//! The on-disk format is a plain JSON document; see [`schema`] for its exact
//! shape. Serialization is implemented by converting between the domain
//! types and the schema types, never by deriving on the domain types
//! directly, so that internal representation changes cannot silently change
//! the format.

pub(crate) mod conversion;
pub(crate) mod schema;

#[cfg(test)]
mod tests;
