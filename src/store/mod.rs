mod court_store;

pub use court_store::CourtStore;
