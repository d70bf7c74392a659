pub mod artifact_store;
pub mod bootstrap;
pub mod cities;
pub mod intake;
pub mod llm_clients;
pub mod settings;
