pub mod mock_data;
pub mod service;
