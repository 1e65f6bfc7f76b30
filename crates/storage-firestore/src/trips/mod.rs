mod repository;

pub use repository::TripRepository;
