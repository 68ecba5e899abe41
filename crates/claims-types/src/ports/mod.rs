pub mod claim_repository;
pub mod claims_service;
