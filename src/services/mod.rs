// Service exports
pub mod directory;

pub use directory::{TeacherRecord, SkippedRecord, NormalizedTeachers, DirectoryError, normalize_teachers};
