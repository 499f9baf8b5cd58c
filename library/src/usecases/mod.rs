// One trait per application action and one implementation wrapping the
// repository it delegates to. Implementations add no logic of their own.
pub mod catalog;
pub mod session;
pub mod users;

pub use catalog::{
    LoadBooks, LoadBooksService, LoadCities, LoadCitiesService, LoadLoans, LoadLoansService,
    LoadStates, LoadStatesService,
};
pub use session::{
    ACCESS_TOKEN_KEY, AddUserLogin, AddUserLoginService, Authentication, AuthenticationService,
    CacheLoadCurrentAccount, CacheSaveCurrentAccount, LoadCurrentAccount, Logout, LogoutService,
    REFRESH_TOKEN_KEY, SaveCurrentAccount,
};
pub use users::{
    AddUser, AddUserService, DeleteUser, DeleteUserService, LoadUserById, LoadUserByIdService,
    LoadUsers, LoadUsersService, UpdateUser, UpdateUserService,
};
