//! Rendering of the identifier character reference pages.
//!
//! A page is a markdown document made of a generated-file warning, a title,
//! an introduction that links to the other page, the provenance of the data,
//! and a table with one row per character.
pub mod page;
pub mod row;
pub mod text;
