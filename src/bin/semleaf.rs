use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::debug;

use semleaf::app::{App, Shell};
use semleaf::components::{render, FormMode, PhraseForm};
use semleaf::config::ClientOptions;
use semleaf::export::ExportFormat;
use semleaf::pages::{HomePage, PhraseDetailPage, PhraseFormPage, SearchResultsPage};
use semleaf::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "semleaf", version)]
#[command(about = "Manage your Semleaf phrase collection from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL. Defaults to SEMLEAF_URL or http://localhost:8080.
    #[arg(long, global = true)]
    url: Option<String>,

    /// Session cookie as `name=value`. Defaults to SEMLEAF_SESSION.
    #[arg(long, global = true)]
    session: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show who is signed in
    Status,
    /// Print the URL to open in a browser to sign in
    LoginUrl,
    /// End the current session
    Logout,
    /// List recent phrases
    List {
        #[arg(long)]
        limit: Option<u32>,
        /// Show source, tags, memo and numbered meanings for each row
        #[arg(long)]
        expand: bool,
    },
    /// Show one phrase
    Show { id: String },
    /// Add a phrase
    Add {
        #[command(flatten)]
        fields: PhraseFields,
    },
    /// Edit a phrase. Omitted fields keep their current value.
    Edit {
        id: String,
        #[command(flatten)]
        fields: PhraseFields,
    },
    /// Delete a phrase
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Search by meaning or by text
    Search {
        query: String,
        #[arg(long, default_value = "semantic")]
        mode: SearchMode,
        /// Result limit for text search. Defaults to the configured search limit.
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Download the whole collection
    Export {
        #[arg(long, default_value = "json")]
        format: ExportFormat,
        /// Destination file or directory. Defaults to the server's file name
        /// in the current directory.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct PhraseFields {
    #[arg(long)]
    phrase: Option<String>,
    /// A meaning; repeat for several
    #[arg(long = "meaning")]
    meanings: Vec<String>,
    #[arg(long)]
    source: Option<String>,
    /// A tag; repeat for several
    #[arg(long = "tag")]
    tags: Vec<String>,
    #[arg(long)]
    memo: Option<String>,
}

impl PhraseFields {
    /// Write the given fields over the form's current values
    fn apply(self, form: &mut PhraseForm) {
        if let Some(phrase) = self.phrase {
            form.phrase = phrase;
        }
        if !self.meanings.is_empty() {
            while form.meanings().len() > 1 {
                form.remove_meaning(form.meanings().len() - 1);
            }
            for (i, meaning) in self.meanings.iter().enumerate() {
                if i > 0 {
                    form.add_meaning();
                }
                form.update_meaning(i, meaning);
            }
        }
        if let Some(source) = self.source {
            form.source = source;
        }
        if !self.tags.is_empty() {
            form.tags.clear();
            for tag in self.tags {
                form.tags.set_input(&tag);
                form.tags.add();
            }
        }
        if let Some(memo) = self.memo {
            form.memo = memo;
        }
    }
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut options = ClientOptions::from_env().context("Failed to read SEMLEAF_* settings")?;
    if let Some(url) = &cli.url {
        options = options.with_base_url(url);
    }
    if let Some(session) = &cli.session {
        options = options.with_session_cookie(session);
    }
    options.validate()?;
    let client = Semleaf::new_with_options(options);

    let result = dispatch(&client, cli.command).await;
    if let Err(e) = &result {
        if let Some(err) = e.downcast_ref::<Error>() {
            let mut app = App::default();
            if app.observe_error(err) {
                let login = client.auth().login_url()?;
                anyhow::bail!(
                    "Not signed in. Sign in at {login} and pass the session cookie via SEMLEAF_SESSION."
                );
            }
        }
    }
    result
}

async fn dispatch(client: &Semleaf, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Status => {
            let mut app = App::default();
            match app.start(client).await {
                Shell::Authenticated { email } => println!("Signed in as {email}"),
                _ => println!("Not signed in"),
            }
        }
        Commands::LoginUrl => {
            println!("{}", client.auth().login_url()?);
        }
        Commands::Logout => {
            let mut app = App::default();
            app.logout(client).await?;
            println!("Signed out");
        }
        Commands::List { limit, expand } => {
            let mut page = HomePage::new();
            page.load(client, limit.unwrap_or(client.options.list_limit)).await?;
            let Some(table) = page.table() else {
                return Ok(());
            };
            if let Some(message) = table.empty_message() {
                println!("{message}");
            }
            for phrase in table.rows() {
                println!("{}\t{}", phrase.id, render::table_row(phrase));
                if expand {
                    for (label, value) in render::expanded_row(phrase) {
                        println!("    {label}: {value}");
                    }
                }
            }
        }
        Commands::Show { id } => {
            let mut page = PhraseDetailPage::new(&id);
            page.load(client).await?;
            if let Some(text) = page.render() {
                println!("{text}");
            }
        }
        Commands::Add { fields } => {
            let mut page = PhraseFormPage::create();
            fields.apply(page.form_mut());
            save(client, page).await?;
        }
        Commands::Edit { id, fields } => {
            let mut page = PhraseFormPage::edit(&id);
            page.load(client).await?;
            debug!("Editing {:?}", page.form().mode());
            fields.apply(page.form_mut());
            save(client, page).await?;
        }
        Commands::Delete { id, yes } => {
            let mut page = PhraseDetailPage::new(&id);
            match page.delete(client, yes).await? {
                Some(_) => println!("Deleted {id}"),
                None => println!("Not deleted. Pass --yes to confirm."),
            }
        }
        Commands::Search { query, mode, limit } => {
            let mut page = SearchResultsPage::for_route(&Route::search(&query, mode))
                .context("search route")?
                .with_text_limit(limit.unwrap_or(client.options.search_limit));
            page.load(client).await?;
            if let Some(message) = page.status_message() {
                println!("{message}");
            }
            for phrase in page.results().unwrap_or_default() {
                println!("[{}] {}\n", phrase.id, render::card(phrase));
            }
        }
        Commands::Export { format, output } => {
            let file = client.export().download(format).await?;
            let target = output.unwrap_or_else(|| PathBuf::from("."));
            let path = file
                .save(&target)
                .await
                .with_context(|| format!("Failed to write {}", target.display()))?;
            println!(
                "Wrote {} bytes ({}) to {}",
                file.bytes.len(),
                file.content_type.as_deref().unwrap_or("unknown type"),
                path.display()
            );
        }
    }
    Ok(())
}

async fn save(client: &Semleaf, mut page: PhraseFormPage) -> anyhow::Result<()> {
    let editing = matches!(page.form().mode(), FormMode::Edit(_));
    match page.submit(client).await? {
        Some(route) => {
            let verb = if editing { "Updated" } else { "Created" };
            println!("{verb} {route}");
            Ok(())
        }
        None => anyhow::bail!("A phrase and at least one meaning are required"),
    }
}
