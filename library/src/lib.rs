pub mod domain;
pub mod http;
pub mod mock;
pub mod ports;
pub mod routes;
pub mod usecases;
