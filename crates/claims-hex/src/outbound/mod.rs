pub mod claim_files;
