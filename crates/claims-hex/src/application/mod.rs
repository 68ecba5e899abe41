pub mod claims_service;
