/// Business logic layer for content-service
///
/// The content service decides between list and search semantics, enforces
/// the must-exist precondition for reads, updates and deletes, and maps
/// stored rows to their wire view.
pub mod content;

pub use content::ContentService;
