// Application layer - Use cases over the observation repository
pub mod catalog_service;
pub mod chart_service;
pub mod observation_repository;

#[cfg(test)]
pub mod test_support;
