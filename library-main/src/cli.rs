use crate::factories::{
    make_add_user, make_add_user_login, make_authentication, make_cache_repository,
    make_delete_user, make_load_books, make_load_cities, make_load_current_account,
    make_load_loans, make_load_states, make_load_user_by_id, make_load_users, make_logout,
    make_save_current_account, make_update_user,
};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use library::domain::{AddUserParams, Credentials, Loan, LogoutParams, UserLoginParams};
use library::ports::CacheRepository;
use library::routes::Route;
use serde::Serialize;
use serde_json::{Value, json};
use shared::Result;
use shared::config::Config;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "library", version, about = "Library loan management client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage library users
    Users {
        #[command(subcommand)]
        command: UserCommand,
    },
    /// List the book catalogue
    Books,
    /// List loans
    Loans {
        /// Only loans still out past their due date
        #[arg(long)]
        overdue: bool,
    },
    /// List cities
    Cities,
    /// List states
    States,
    /// Sign in and remember the account tokens
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Revoke the refresh token and forget the account
    Logout,
    /// Show which screen a path resolves to for the current account
    Open {
        #[arg(value_parser = parse_route)]
        route: Route,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    List,
    Get {
        id: String,
    },
    Add(UserArgs),
    Update {
        id: String,
        #[command(flatten)]
        user: UserArgs,
    },
    Delete {
        id: String,
    },
    /// Attach login credentials to an existing user
    AddLogin {
        user_id: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Debug, Args)]
pub struct UserArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: Option<String>,
}

impl From<UserArgs> for AddUserParams {
    fn from(args: UserArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            phone: args.phone,
            address: None,
        }
    }
}

fn parse_route(path: &str) -> std::result::Result<Route, String> {
    Route::parse(path).ok_or_else(|| format!("unknown route '{path}'"))
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Execute one command and return what should be printed.
pub async fn run(command: Command, config: &Config) -> Result<Value> {
    let cache = make_cache_repository(config)?;
    run_with_cache(command, config, cache).await
}

/// Same as [`run`], against an already opened Cache Store
pub async fn run_with_cache(
    command: Command,
    config: &Config,
    cache: Arc<dyn CacheRepository>,
) -> Result<Value> {
    match command {
        Command::Users { command } => match command {
            UserCommand::List => to_json(make_load_users(config, cache).perform().await?),
            UserCommand::Get { id } => {
                to_json(make_load_user_by_id(config, cache).perform(&id).await?)
            }
            UserCommand::Add(user) => {
                to_json(make_add_user(config, cache).perform(user.into()).await?)
            }
            UserCommand::Update { id, user } => to_json(
                make_update_user(config, cache)
                    .perform(&id, user.into())
                    .await?,
            ),
            UserCommand::Delete { id } => {
                make_delete_user(config, cache).perform(&id).await?;
                Ok(json!({ "deleted": id }))
            }
            UserCommand::AddLogin {
                user_id,
                username,
                password,
            } => {
                make_add_user_login(config, cache)
                    .perform(UserLoginParams {
                        user_id: user_id.clone(),
                        username,
                        password,
                    })
                    .await?;
                Ok(json!({ "loginAdded": user_id }))
            }
        },
        Command::Books => to_json(make_load_books().perform().await?),
        Command::Loans { overdue } => {
            let today = Local::now().date_naive();
            let loans: Vec<Loan> = make_load_loans()
                .perform()
                .await?
                .into_iter()
                .filter(|loan| !overdue || loan.is_overdue(today))
                .collect();
            to_json(loans)
        }
        Command::Cities => to_json(make_load_cities(config, cache).perform().await?),
        Command::States => to_json(make_load_states(config, cache).perform().await?),
        Command::Login { username, password } => {
            let account = make_authentication(config)
                .auth(Credentials {
                    username: username.clone(),
                    password,
                })
                .await?;
            make_save_current_account(cache).save(Some(account)).await?;
            info!("Signed in as {}", username);
            Ok(json!({ "loggedIn": username }))
        }
        Command::Logout => match make_load_current_account(cache.clone()).load().await? {
            Some(account) => {
                let revoked = make_logout(config)
                    .logout(LogoutParams::new(account.refresh_token))
                    .await;
                // The local account is forgotten even when the server refuses
                make_save_current_account(cache).save(None).await?;
                if let Err(e) = &revoked {
                    warn!("Remote logout failed, local account cleared: {}", e);
                }
                revoked?;
                Ok(json!({ "loggedOut": true }))
            }
            None => {
                info!("No current account, nothing to log out");
                Ok(json!({ "loggedOut": false }))
            }
        },
        Command::Open { route } => {
            let account = make_load_current_account(cache).load().await?;
            let requested = route.path();
            let resolved = Route::resolve(route, account.as_ref());
            Ok(json!({ "requested": requested, "resolved": resolved.path() }))
        }
    }
}
