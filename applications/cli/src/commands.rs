//! Subcommands and the session they run against.
//!
//! Every command is mapped to a [`Route`] and checked by the navigation
//! guard before it touches the network, the same way a view transition
//! would be.

use crate::config::AppConfig;
use crate::error::{CliError, Result};
use clap::Subcommand;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;
use vinyl_client::{ClientConfig, VinylClient};
use vinyl_core::{AlbumId, FileStore, KeyValueStore, VoteDirection};
use vinyl_state::{AlbumStore, Navigation, NavigationGuard, Route, SessionStore};

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Log in with email and password
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Account password
        #[arg(short, long, env = "VINYL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and log in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Account email
        #[arg(short, long)]
        email: String,
        /// Account password
        #[arg(short, long, env = "VINYL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List one page of albums, best first
    Albums {
        /// Page number (starts at 1)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Filter by album name or artist
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Vote an album up or down
    Vote {
        /// Album id
        id: AlbumId,
        /// up or down
        direction: VoteDirection,
    },
    /// Delete an album (admin only)
    Delete {
        /// Album id
        id: AlbumId,
    },
}

impl Command {
    /// The view this command stands in for.
    pub fn route(&self) -> Route {
        match self {
            Command::Login { .. } => Route::Login,
            Command::Register { .. } => Route::Register,
            Command::Logout
            | Command::Whoami
            | Command::Albums { .. }
            | Command::Vote { .. }
            | Command::Delete { .. } => Route::Albums,
        }
    }
}

/// Stores wired to one API and one durable session slot.
pub struct App {
    session: Arc<SessionStore>,
    albums: AlbumStore,
    guard: NavigationGuard,
}

impl App {
    /// Build from configuration, persisting the session to `storage.path`.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.storage.path.clone()));
        Self::with_storage(config.api.clone(), storage)
    }

    pub fn with_storage(api: ClientConfig, storage: Arc<dyn KeyValueStore>) -> Result<Self> {
        let client = Arc::new(VinylClient::new(api, storage.clone())?);
        let session = Arc::new(SessionStore::new(client.clone(), storage));
        let albums = AlbumStore::new(client);
        let guard = NavigationGuard::new(session.clone());

        Ok(Self {
            session,
            albums,
            guard,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn albums(&self) -> &AlbumStore {
        &self.albums
    }

    /// Run one command, writing human-readable output to `out`.
    ///
    /// A guard redirect prints a hint and succeeds without running the command.
    pub async fn run<W: Write>(&self, command: Command, out: &mut W) -> Result<()> {
        let route = command.route();
        if let Navigation::Redirect(target) = self.guard.check(route).await {
            debug!(from = %route, to = %target, "Command redirected");
            writeln!(out, "{}", redirect_hint(target))?;
            return Ok(());
        }

        match command {
            Command::Login { email, password } => {
                if !self.session.login(&email, &password).await {
                    return Err(self.session_failure("Login failed").await);
                }
                self.print_identity(out).await?;
            }
            Command::Register {
                name,
                email,
                password,
            } => {
                if !self.session.register(&name, &email, &password).await {
                    return Err(self.session_failure("Registration failed").await);
                }
                self.print_identity(out).await?;
            }
            Command::Logout => {
                self.session.logout().await;
                writeln!(out, "Logged out")?;
            }
            Command::Whoami => {
                self.print_identity(out).await?;
            }
            Command::Albums { page, search } => {
                self.albums.set_search_query(&search).await;
                if self.albums.fetch_page(page, &search).await.is_none() {
                    return Err(self.album_failure("Could not load albums").await);
                }
                self.print_albums(out).await?;
            }
            Command::Vote { id, direction } => match self.albums.vote(id, direction).await {
                Some(album) => {
                    writeln!(
                        out,
                        "{} {}: {} - {} now at {} ({} up, {} down)",
                        vote_verb(direction),
                        album.id,
                        album.name,
                        album.artist,
                        album.vote_score(),
                        album.upvotes,
                        album.downvotes
                    )?;
                }
                None => return Err(self.album_failure("Vote failed").await),
            },
            Command::Delete { id } => {
                if !self.albums.delete_album(id).await {
                    return Err(self.album_failure("Delete failed").await);
                }
                writeln!(out, "Deleted album {}", id)?;
            }
        }

        Ok(())
    }

    async fn print_identity<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.session.identity().await {
            Some(user) if user.is_admin() => {
                writeln!(out, "Logged in as {} <{}> (admin)", user.name, user.email)?
            }
            Some(user) => writeln!(out, "Logged in as {} <{}>", user.name, user.email)?,
            None => writeln!(out, "Logged in (profile unavailable)")?,
        }
        Ok(())
    }

    async fn print_albums<W: Write>(&self, out: &mut W) -> Result<()> {
        let snapshot = self.albums.snapshot().await;
        let visible = snapshot.visible_items();

        if visible.is_empty() {
            writeln!(out, "No albums found")?;
        }

        for album in &visible {
            let marker = match album.user_vote {
                Some(VoteDirection::Up) => "+",
                Some(VoteDirection::Down) => "-",
                None => " ",
            };
            writeln!(
                out,
                "{:>5} {} [{}] {} - {}",
                album.vote_score(),
                marker,
                album.id,
                album.name,
                album.artist
            )?;
        }

        writeln!(
            out,
            "Page {} of {}",
            snapshot.current_page(),
            snapshot.total_pages()
        )?;
        Ok(())
    }

    async fn session_failure(&self, fallback: &str) -> CliError {
        CliError::operation(self.session.last_error().await, fallback)
    }

    async fn album_failure(&self, fallback: &str) -> CliError {
        CliError::operation(self.albums.last_error().await, fallback)
    }
}

fn redirect_hint(target: Route) -> String {
    match target {
        Route::Login => "Not logged in. Run `vinyl login --email <email>` first.".to_string(),
        Route::Albums => "Already logged in. Run `vinyl logout` to switch accounts.".to_string(),
        other => format!("Redirected to {}", other),
    }
}

fn vote_verb(direction: VoteDirection) -> &'static str {
    match direction {
        VoteDirection::Up => "Upvoted",
        VoteDirection::Down => "Downvoted",
    }
}
