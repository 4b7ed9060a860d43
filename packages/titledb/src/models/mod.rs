//! Serialization views over the catalog entities.
//!
//! Each entity has a dump struct (`*Schema`), a load struct (`*Input`) and a
//! nested view that embeds its relations. Embedded relations use dedicated
//! structs that lack the back-reference, so a payload can never cycle.
//! `created_at`/`updated_at` are never part of any view.

pub mod arm9;
pub mod assets;
pub mod category;
pub mod cia;
pub mod entry;
pub mod shared;
pub mod smdh;
pub mod tdsx;
pub mod user;
pub mod xml;
