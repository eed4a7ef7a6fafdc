/*!
# IO utilities

Output file management for the three derived formats.
!*/
pub mod writer;

pub use writer::FormatWriters;
