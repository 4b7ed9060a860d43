pub mod arm9;
pub mod assets;
pub mod category;
pub mod cia;
pub mod entry;
pub mod group;
pub mod smdh;
pub mod tdsx;
pub mod user;
pub mod xml;
