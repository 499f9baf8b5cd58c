pub mod client;
pub mod repositories;

#[cfg(test)]
mod test_support;

pub use client::{ACCESS_TOKEN_HEADER, AuthorizedHttpClient, ReqwestHttpClient};
pub use repositories::{
    RemoteAuthenticationRepository, RemoteCityRepository, RemoteLogoutRepository,
    RemoteStateRepository, RemoteUserLoginRepository, RemoteUserRepository,
};
