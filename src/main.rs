use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use build2rise::api::ApiClient;
use build2rise::config::Config;
use build2rise::containers::Containers;
use build2rise::lifecycle::{Lifecycle, LoadState};
use build2rise::logging;
use build2rise::models::{
    FounderProfile, InvestorProfile, ProjectStatus, RegisterRequest, SearchFilters, UserType,
};
use build2rise::screens;
use build2rise::session::{SecureString, SessionStore};

#[derive(Parser)]
#[command(name = "build2rise")]
#[command(about = "Command-line client for the Build2Rise founder/investor network")]
#[command(version)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides api.base_url)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        /// founder or investor
        #[arg(long)]
        role: UserType,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show who is signed in
    Status,
    /// Check that the backend is reachable
    Health,
    /// Show your profile, or another user's
    Profile {
        #[arg(long)]
        user: Option<String>,
    },
    /// Create your founder profile
    FounderProfile {
        #[arg(long)]
        startup: String,
        #[arg(long)]
        industry: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        stage: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        funding_goal: Option<String>,
        #[arg(long)]
        website: Option<String>,
    },
    /// Create your investor profile
    InvestorProfile {
        #[arg(long)]
        firm: Option<String>,
        /// Repeat for several industries
        #[arg(long = "industry")]
        industries: Vec<String>,
        #[arg(long)]
        location: String,
        /// Repeat for several stages
        #[arg(long = "stage")]
        stages: Vec<String>,
        #[arg(long)]
        ticket_size: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
    /// Show the feed, your posts, or a user's posts
    Feed {
        #[arg(long, conflicts_with = "user")]
        mine: bool,
        #[arg(long)]
        user: Option<String>,
    },
    /// Publish a text post
    Post { text: String },
    /// Publish a post with an image or video
    Upload {
        file: PathBuf,
        #[arg(long, default_value = "")]
        text: String,
    },
    /// Show one post with its interactions
    ShowPost { id: String },
    /// Like or unlike a post
    Like { id: String },
    /// Comment on a post
    Comment { id: String, text: String },
    /// List comments on a post
    Comments { id: String },
    /// Share a post
    Share { id: String },
    /// List conversations
    Conversations,
    /// Show the thread with one user
    Thread { peer: String },
    /// Send a message, optionally sharing a post
    Send {
        peer: String,
        #[arg(default_value = "")]
        text: String,
        #[arg(long)]
        post: Option<String>,
    },
    /// Find users to message or share with
    FindRecipient { query: String },
    /// List connections
    Connections {
        /// Show pending requests instead of accepted connections
        #[arg(long)]
        pending: bool,
    },
    /// Send a connection request
    Connect { user: String },
    /// Accept a connection request
    Accept { id: String },
    /// Reject a connection request
    Reject { id: String },
    /// List supported startups, or your supporters
    Projects {
        /// Show investors backing you
        #[arg(long)]
        founder: bool,
    },
    /// Back a founder
    Support { founder: String },
    /// Check whether you back a founder
    CheckSupport { founder: String },
    /// Change a project's status
    ProjectStatus {
        id: String,
        /// pending, active, completed or cancelled
        status: ProjectStatus,
    },
    /// Search users
    Search {
        #[arg(long)]
        role: Option<UserType>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        stage: Option<String>,
    },
    /// Show ranked matches for your account
    Matches {
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
        config.validate()?;
    }
    Ok(config)
}

/// Runs one command. `Ok(false)` means the request ended in an error state
/// that has already been printed.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = load_config(&cli)?;
    let session = SessionStore::open_file(config.session_path())
        .context("Failed to open session store")?;
    let api = ApiClient::new(&config, session.clone())?;
    let app = Containers::new(api, &config);
    let me = session.user_id();

    let ok = match cli.command {
        Command::Register {
            email,
            name,
            role,
            password,
        } => {
            let password = password_or_prompt(password)?;
            let request = RegisterRequest {
                email: email.trim().to_string(),
                password,
                full_name: name.trim().to_string(),
                user_type: role,
            };
            app.auth.register(request).await;
            show(app.auth.state(), |auth| {
                format!("Welcome! Signed in as {} ({})", auth.user_id, auth.user_type)
            })
        }
        Command::Login { email, password } => {
            let password = password_or_prompt(password)?;
            app.auth.login(&email, password.expose()).await;
            show(app.auth.state(), |auth| {
                format!("Signed in as {} ({})", auth.user_id, auth.user_type)
            })
        }
        Command::Logout => {
            app.auth.logout().await?;
            println!("Signed out.");
            true
        }
        Command::Status => {
            let current = session.current();
            match (current.is_authenticated(), current.user_id, current.user_type) {
                (true, Some(id), Some(user_type)) => {
                    println!("Signed in as {} ({})", id, user_type)
                }
                (true, _, _) => println!("Signed in"),
                (false, _, _) => println!("Not signed in"),
            }
            true
        }
        Command::Health => {
            app.auth.check_health().await;
            show(app.auth.health(), |status| status.clone())
        }
        Command::Profile { user } => {
            let slot = match user {
                Some(id) => {
                    app.profile.load_user(&id).await;
                    app.profile.viewed()
                }
                None => {
                    app.profile.load_current().await;
                    app.profile.current()
                }
            };
            show(slot, screens::render_profile)
        }
        Command::FounderProfile {
            startup,
            industry,
            location,
            stage,
            description,
            funding_goal,
            website,
        } => {
            let profile = FounderProfile {
                startup_name: startup,
                industry,
                location,
                stage,
                description,
                funding_goal,
                website,
            };
            app.profile.create_founder_profile(profile).await;
            show(app.profile.create(), screens::render_profile)
        }
        Command::InvestorProfile {
            firm,
            industries,
            location,
            stages,
            ticket_size,
            bio,
        } => {
            let profile = InvestorProfile {
                firm_name: firm,
                industries,
                location,
                preferred_stages: stages,
                ticket_size,
                bio,
            };
            app.profile.create_investor_profile(profile).await;
            show(app.profile.create(), screens::render_profile)
        }
        Command::Feed { mine, user } => {
            let posts = &app.posts;
            if mine {
                posts.load_my_posts().await;
                show(posts.my_posts(), |items| {
                    screens::render_feed(items, &posts.liked_posts())
                })
            } else if let Some(id) = user {
                posts.load_user_posts(&id).await;
                show(posts.user_posts(), |items| {
                    screens::render_feed(items, &posts.liked_posts())
                })
            } else {
                posts.load_feed().await;
                show(posts.feed(), |items| {
                    screens::render_feed(items, &posts.liked_posts())
                })
            }
        }
        Command::Post { text } => {
            app.posts.create_post(&text).await;
            show(app.posts.create(), |post| format!("Posted [{}]", post.id))
        }
        Command::Upload { file, text } => {
            app.posts.upload_post(&text, &file).await;
            show(app.posts.create(), |post| format!("Uploaded [{}]", post.id))
        }
        Command::ShowPost { id } => {
            app.posts.load_post(&id).await;
            let ok = show(app.posts.detail(), screens::render_post);
            if ok {
                app.posts.load_interactions(&id).await;
                show(app.posts.interactions(), screens::render_interactions)
            } else {
                ok
            }
        }
        Command::Like { id } => {
            app.posts.toggle_like(&id).await;
            show(app.posts.like(), |like| {
                let verb = if like.liked_by_current_user {
                    "Liked"
                } else {
                    "Unliked"
                };
                format!("{} [{}] ({} likes)", verb, like.post_id, like.likes_count)
            })
        }
        Command::Comment { id, text } => {
            app.posts.add_comment(&id, &text).await;
            show(app.posts.comment(), |comment| {
                format!("Commented [{}]", comment.id)
            })
        }
        Command::Comments { id } => {
            app.posts.load_comments(&id).await;
            show(app.posts.comments(), |items| screens::render_comments(items))
        }
        Command::Share { id } => {
            app.posts.share_post(&id).await;
            show(app.posts.share(), |share| {
                format!("Shared [{}] ({} shares)", share.post_id, share.shares_count)
            })
        }
        Command::Conversations => {
            app.messages.load_conversations().await;
            show(app.messages.conversations(), |items| {
                screens::render_conversations(items)
            })
        }
        Command::Thread { peer } => {
            app.messages.load_thread(&peer).await;
            show(app.messages.thread(), |items| {
                screens::render_thread(items, me.as_deref())
            })
        }
        Command::Send { peer, text, post } => {
            app.messages
                .send_message(&peer, &text, post.as_deref())
                .await;
            show(app.messages.send(), |message| {
                format!("Sent [{}]", message.id)
            })
        }
        Command::FindRecipient { query } => {
            match app.messages.search_share_targets(&query).await {
                Some(_) => show(app.messages.share_targets(), |items| {
                    screens::render_users(items)
                }),
                None => {
                    println!("Enter a name to search for.");
                    true
                }
            }
        }
        Command::Connections { pending } => {
            let slot = if pending {
                app.connections.load_pending().await;
                app.connections.pending()
            } else {
                app.connections.load_accepted().await;
                app.connections.accepted()
            };
            show(slot, |items| screens::render_connections(items, me.as_deref()))
        }
        Command::Connect { user } => {
            app.connections.request(&user).await;
            show(app.connections.action(), |c| {
                format!("Connection request sent [{}]", c.id)
            })
        }
        Command::Accept { id } => {
            app.connections.accept(&id).await;
            show(app.connections.action(), |c| format!("Accepted [{}]", c.id))
        }
        Command::Reject { id } => {
            app.connections.reject(&id).await;
            show(app.connections.action(), |c| format!("Rejected [{}]", c.id))
        }
        Command::Projects { founder } => {
            if founder || session.user_type() == Some(UserType::Founder) {
                app.projects.load_supporters().await;
                show(app.projects.supporters(), |items| {
                    screens::render_projects(items, UserType::Founder)
                })
            } else {
                app.projects.load_supported().await;
                show(app.projects.supported(), |items| {
                    screens::render_projects(items, UserType::Investor)
                })
            }
        }
        Command::Support { founder } => {
            app.projects.support(&founder).await;
            show(app.projects.support_request(), |project| {
                format!("Now supporting [{}] ({})", project.founder.name, project.status)
            })
        }
        Command::CheckSupport { founder } => {
            app.projects.check_support(&founder).await;
            show(app.projects.check(), screens::render_support_check)
        }
        Command::ProjectStatus { id, status } => {
            app.projects.update_status(&id, status).await;
            show(app.projects.status(), |project| {
                format!("Project [{}] is now {}", project.id, project.status)
            })
        }
        Command::Search {
            role,
            industry,
            location,
            stage,
        } => {
            let filters = SearchFilters {
                user_type: role,
                industry,
                location,
                stage,
            };
            app.discovery.search(filters).await;
            show(app.discovery.results(), |items| screens::render_users(items))
        }
        Command::Matches { limit } => {
            app.discovery.load_matches(limit).await;
            show(app.discovery.matches(), screens::render_matches)
        }
    };
    Ok(ok)
}

/// Print the slot's final state. Returns false if it ended in an error.
fn show<T>(slot: &Lifecycle<T>, render: impl FnOnce(&T) -> String) -> bool
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let state = slot.state();
    let text = screens::render_state(&state, "Nothing to show.", render);
    if let LoadState::Error(_) = state {
        eprintln!("{}", text);
        false
    } else {
        println!("{}", text);
        true
    }
}

fn password_or_prompt(password: Option<String>) -> anyhow::Result<SecureString> {
    if let Some(password) = password {
        return Ok(SecureString::new(password));
    }
    eprint!("Password: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password")?;
    Ok(SecureString::new(line.trim_end_matches(['\r', '\n'])))
}
