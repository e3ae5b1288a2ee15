pub mod facts_service;
