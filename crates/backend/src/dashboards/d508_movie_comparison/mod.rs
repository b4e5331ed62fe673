pub mod mock_data;
pub mod selection;
pub mod service;
