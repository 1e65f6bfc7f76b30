mod repository;

pub use repository::ChecklistRepository;
