//! Command-line front end.
//!
//! Each command dispatches store actions and renders the resulting
//! snapshot. No business logic lives here.

pub mod render;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use crate::api::{ArticleQuery, Services};
use crate::config::Config;
use crate::http::ApiError;
use crate::store::{AppStore, SessionStore};
use crate::validation::{ArticleForm, LoginForm, RegisterForm};

#[derive(Debug, Parser)]
#[command(name = "travelhub", version, about = "Browse and author TravelHub travel articles")]
pub struct Cli {
    /// Path to the config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the content API base URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and remember the session.
    Login {
        /// Email or username.
        #[arg(long)]
        identifier: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the logged-in user.
    Whoami {
        /// Re-fetch the user from the server.
        #[arg(long)]
        refresh: bool,
    },
    /// Browse and manage articles.
    #[command(subcommand)]
    Articles(ArticlesCommand),
    /// List categories.
    Categories,
    /// Upload a file and print the resulting asset URLs.
    Upload { path: PathBuf },
}

#[derive(Debug, Subcommand)]
pub enum ArticlesCommand {
    /// List articles.
    List {
        /// First page to fetch.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Number of pages to load, appending each to the list.
        #[arg(long, default_value_t = 1)]
        pages: u32,
        /// Only articles with exactly this title (case-insensitive).
        #[arg(long)]
        title: Option<String>,
        /// Only articles in the category with this name (case-insensitive).
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one article.
    Show { document_id: String },
    /// Create an article.
    Create(ArticleArgs),
    /// Edit one of your articles.
    Edit {
        document_id: String,
        #[command(flatten)]
        article: ArticleArgs,
    },
    /// Delete one of your articles.
    Delete { document_id: String },
}

#[derive(Debug, Clone, Args)]
pub struct ArticleArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    /// Category id.
    #[arg(long)]
    pub category: u64,
    /// Cover image URL.
    #[arg(long)]
    pub cover: Option<String>,
}

impl From<ArticleArgs> for ArticleForm {
    fn from(args: ArticleArgs) -> Self {
        Self {
            title: args.title,
            description: args.description,
            category: args.category,
            cover_image_url: args.cover,
        }
    }
}

/// Load configuration, build the store and execute the command.
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
        config.validate()?;
    }

    let services = Services::from_config(&config)?;
    let session = SessionStore::new(config.session.resolved_dir());
    let store = AppStore::with_session(services, session);

    execute(&store, &config, cli.command).await
}

/// Execute a command against an existing store and return its output.
pub async fn execute(store: &AppStore, config: &Config, command: Command) -> anyhow::Result<String> {
    match command {
        Command::Login {
            identifier,
            password,
        } => {
            store
                .submit_login(&LoginForm {
                    identifier,
                    password,
                })
                .await?;
            Ok(render::login_success(&store.snapshot().auth))
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let form = RegisterForm {
                username,
                email,
                password,
            };
            store.submit_register(&form).await?;
            Ok(format!(
                "Registered {}. Log in to continue.",
                form.username
            ))
        }
        Command::Logout => {
            store.logout();
            Ok("Logged out.".to_string())
        }
        Command::Whoami { refresh } => {
            if refresh {
                store.refresh_user().await;
            }
            let auth = store.snapshot().auth;
            if let Some(error) = &auth.error {
                bail!("{}", error);
            }
            Ok(render::whoami(&auth))
        }
        Command::Articles(command) => execute_articles(store, config, command).await,
        Command::Categories => {
            store.fetch_categories().await;
            let categories = store.snapshot().categories;
            if let Some(error) = &categories.error {
                bail!("{}", error);
            }
            Ok(render::category_list(&categories.categories))
        }
        Command::Upload { path } => {
            let token = store
                .snapshot()
                .auth
                .token
                .ok_or(ApiError::AuthenticationRequired)?;
            let assets = store
                .services()
                .upload
                .upload_file(&path, &token)
                .await
                .with_context(|| format!("Upload of '{}' failed", path.display()))?;
            Ok(render::uploaded_assets(&assets))
        }
    }
}

async fn execute_articles(
    store: &AppStore,
    config: &Config,
    command: ArticlesCommand,
) -> anyhow::Result<String> {
    match command {
        ArticlesCommand::List {
            page,
            pages,
            title,
            category,
        } => {
            store.set_search_term(title.clone().unwrap_or_default());
            store.set_selected_category(category.clone().unwrap_or_default());

            let mut query = ArticleQuery {
                page: Some(page),
                page_size: Some(config.api.page_size),
                title,
                category_name: category,
            };
            store.fetch_articles(&query, false).await;

            for _ in 1..pages {
                let articles = store.snapshot().articles;
                if articles.error.is_some() || !articles.has_more() {
                    break;
                }
                query.page = Some(articles.current_page + 1);
                store.fetch_articles(&query, true).await;
            }

            let articles = store.snapshot().articles;
            if let Some(error) = &articles.error {
                bail!("{}", error);
            }
            Ok(render::article_list(&articles))
        }
        ArticlesCommand::Show { document_id } => {
            store.fetch_article_by_id(&document_id).await;
            let state = store.snapshot();
            if let Some(error) = &state.articles.error {
                bail!("{}", error);
            }
            match &state.articles.current_article {
                Some(article) => Ok(render::article_detail(article, state.owns_current_article())),
                None => bail!("Article '{}' not found", document_id),
            }
        }
        ArticlesCommand::Create(args) => {
            store.submit_new_article(&ArticleForm::from(args)).await?;
            Ok("Article created.".to_string())
        }
        ArticlesCommand::Edit {
            document_id,
            article,
        } => {
            ensure_owner(store, &document_id).await?;
            store
                .submit_article_edit(&document_id, &ArticleForm::from(article))
                .await?;
            Ok(format!("Article {} updated.", document_id))
        }
        ArticlesCommand::Delete { document_id } => {
            ensure_owner(store, &document_id).await?;
            store.delete_article(&document_id).await?;
            Ok(format!("Article {} deleted.", document_id))
        }
    }
}

/// Refuse to touch articles the logged-in user does not own.
async fn ensure_owner(store: &AppStore, document_id: &str) -> anyhow::Result<()> {
    if store.snapshot().auth.token.is_none() {
        return Err(ApiError::AuthenticationRequired.into());
    }

    store.fetch_article_by_id(document_id).await;
    let state = store.snapshot();
    if let Some(error) = &state.articles.error {
        bail!("{}", error);
    }
    if !state.owns_current_article() {
        bail!("You can only change your own articles");
    }
    Ok(())
}
