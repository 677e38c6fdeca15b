pub mod memory;
pub mod seaorm;

pub use memory::InMemoryDiaryEntryRepository;
pub use seaorm::SeaOrmDiaryEntryRepository;
