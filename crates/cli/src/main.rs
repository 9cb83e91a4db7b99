use anyhow::{Context, Result, anyhow};
use catalog::{
    CatalogProvider, CompanySize, ExperienceLevel, JobId, JobPosting, JobType, JsonCatalog,
    RemoteOption, SeedCatalog,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{JobMatch, SearchEngine};
use prefs::{Bookmarks, JsonFileStore, SavedSearch, SavedSearches};
use query::{QueryState, SortKey};
use std::collections::HashMap;
use std::path::PathBuf;

/// QuickHire - job search from the terminal
#[derive(Parser)]
#[command(name = "quickhire")]
#[command(about = "Search a job catalog, bookmark postings, save searches", long_about = None)]
struct Cli {
    /// Path to a JSON catalog file (defaults to the built-in sample catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory holding persisted bookmarks and saved searches
    #[arg(long, default_value = ".quickhire")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search {
        /// Keyword matched against titles and skills (case-insensitive)
        #[arg(long, default_value = "")]
        keyword: String,

        /// Location substring (case-insensitive)
        #[arg(long, default_value = "")]
        location: String,

        /// Exact role category: Engineer, Manager, Product
        #[arg(long, default_value = "")]
        role: String,

        /// Exact salary band: $50k+, $100k+, $150k+
        #[arg(long, default_value = "")]
        salary: String,

        /// Already-decoded query string, e.g. "keyword=react&role=Engineer"
        #[arg(long, conflicts_with_all = ["keyword", "location", "role", "salary", "from"])]
        params: Option<String>,

        /// Start from a saved search by name
        #[arg(long)]
        from: Option<String>,

        /// Experience level: entry, mid, senior, lead
        #[arg(long)]
        experience: Option<ExperienceLevel>,

        /// Job type: full-time, part-time, contract, freelance, internship
        #[arg(long)]
        job_type: Option<JobType>,

        /// Remote arrangement: remote, hybrid, onsite
        #[arg(long)]
        remote: Option<RemoteOption>,

        /// Company size: startup, small, medium, large
        #[arg(long)]
        company_size: Option<CompanySize>,

        /// Sort key: relevance, date, salary-high, salary-low, company
        /// (anything else falls back to relevance)
        #[arg(long, default_value = "relevance")]
        sort: String,

        /// Required skill, repeatable; a posting needs at least one
        #[arg(long = "skill")]
        skills: Vec<String>,

        /// Minimum salary (numeric-ish, e.g. 120)
        #[arg(long, default_value = "")]
        salary_min: String,

        /// Maximum salary (numeric-ish, e.g. 160)
        #[arg(long, default_value = "")]
        salary_max: String,

        /// Also print the shareable query string for this search
        #[arg(long)]
        share: bool,
    },

    /// Toggle a bookmark on a job id
    Bookmark {
        #[arg(long)]
        id: JobId,
    },

    /// List bookmarked postings
    Bookmarks,

    /// Save a search under a name
    SaveSearch {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        keyword: String,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        role: String,

        #[arg(long, default_value = "")]
        salary: String,
    },

    /// List saved searches
    Searches,

    /// Delete a saved search by name
    DeleteSearch {
        #[arg(long)]
        name: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let provider: Box<dyn CatalogProvider> = match &cli.catalog {
        Some(path) => Box::new(JsonCatalog::new(path)),
        None => Box::new(SeedCatalog),
    };
    let store = JsonFileStore::new(&cli.data_dir);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            keyword,
            location,
            role,
            salary,
            params,
            from,
            experience,
            job_type,
            remote,
            company_size,
            sort,
            skills,
            salary_min,
            salary_max,
            share,
        } => {
            let mut query = base_query(params, from, &store)?;
            if !keyword.is_empty() {
                query.keyword = keyword;
            }
            if !location.is_empty() {
                query.location = location;
            }
            if !role.is_empty() {
                query.role = role;
            }
            if !salary.is_empty() {
                query.salary_band = salary;
            }
            query.advanced.experience = experience;
            query.advanced.job_type = job_type;
            query.advanced.remote = remote;
            query.advanced.company_size = company_size;
            query.advanced.sort = SortKey::from_param(&sort);
            query.advanced.skills = skills;
            query.advanced.salary_min = salary_min;
            query.advanced.salary_max = salary_max;

            handle_search(provider.as_ref(), &store, &query, share)?;
        }
        Commands::Bookmark { id } => handle_bookmark(provider.as_ref(), store, id)?,
        Commands::Bookmarks => handle_bookmarks(provider.as_ref(), &store)?,
        Commands::SaveSearch {
            name,
            keyword,
            location,
            role,
            salary,
        } => {
            let query = QueryState {
                keyword,
                location,
                role,
                salary_band: salary,
                advanced: Default::default(),
            };
            handle_save_search(store, name, &query)?;
        }
        Commands::Searches => handle_searches(&store)?,
        Commands::DeleteSearch { name } => handle_delete_search(store, name)?,
    }

    Ok(())
}

/// Resolve the starting query: `--params`, a saved search, or empty.
fn base_query(
    params: Option<String>,
    from: Option<String>,
    store: &JsonFileStore,
) -> Result<QueryState> {
    if let Some(raw) = params {
        return Ok(QueryState::from_params(&parse_query_string(&raw)));
    }
    if let Some(name) = from {
        let searches = SavedSearches::load(store.clone());
        let saved = searches
            .get(&name)
            .ok_or_else(|| anyhow!("no saved search named {name:?}"))?;
        return Ok(saved.to_query());
    }
    Ok(QueryState::new())
}

/// Split "k=v&k2=v2" into a parameter map. Values are taken as-is; this is
/// the already-decoded form, no percent handling.
fn parse_query_string(raw: &str) -> HashMap<String, String> {
    raw.split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (segment.to_string(), String::new()),
        })
        .collect()
}

/// Handle the 'search' command
fn handle_search(
    provider: &dyn CatalogProvider,
    store: &JsonFileStore,
    query: &QueryState,
    share: bool,
) -> Result<()> {
    let postings = provider.list_postings().context("failed to load catalog")?;
    let total = postings.len();

    let bookmarks = Bookmarks::load(store.clone());
    let matches = SearchEngine::new().search(postings, query, bookmarks.ids())?;

    println!(
        "{} {} of {} postings match",
        "✓".green(),
        matches.len(),
        total
    );
    for m in &matches {
        print_match(m);
    }

    if share {
        let pairs: Vec<String> = query
            .to_params()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        println!("\nshareable: {}", pairs.join("&").cyan());
    }
    Ok(())
}

fn print_match(m: &JobMatch) {
    let marker = if m.bookmarked {
        "★".yellow().to_string()
    } else {
        " ".to_string()
    };
    println!(
        "{} [{}] {} at {}",
        marker,
        m.posting.id,
        m.posting.title.bold(),
        m.posting.company.blue()
    );
    println!(
        "      {} | {} | {} | {} | {}",
        m.posting.location,
        m.posting.salary,
        m.posting.job_type,
        m.posting.experience,
        m.posting.remote
    );
    println!("      skills: {}", m.posting.skills.join(", ").dimmed());
}

/// Handle the 'bookmark' command
fn handle_bookmark(provider: &dyn CatalogProvider, store: JsonFileStore, id: JobId) -> Result<()> {
    let postings = provider.list_postings().context("failed to load catalog")?;
    let posting = postings
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| anyhow!("no posting with id {id}"))?;

    let mut bookmarks = Bookmarks::load(store);
    if bookmarks.toggle(id)? {
        println!("{} bookmarked \"{}\"", "✓".green(), posting.title);
    } else {
        println!("{} removed bookmark on \"{}\"", "✓".green(), posting.title);
    }
    Ok(())
}

/// Handle the 'bookmarks' command
fn handle_bookmarks(provider: &dyn CatalogProvider, store: &JsonFileStore) -> Result<()> {
    let postings = provider.list_postings().context("failed to load catalog")?;
    let bookmarks = Bookmarks::load(store.clone());

    let saved: Vec<&JobPosting> = postings.iter().filter(|p| bookmarks.contains(p.id)).collect();
    if saved.is_empty() {
        println!("no bookmarks yet");
        return Ok(());
    }

    println!("{} {} bookmarked posting(s)", "✓".green(), saved.len());
    for posting in saved {
        println!(
            "{} [{}] {} at {}",
            "★".yellow(),
            posting.id,
            posting.title.bold(),
            posting.company.blue()
        );
    }
    Ok(())
}

/// Handle the 'save-search' command
fn handle_save_search(store: JsonFileStore, name: String, query: &QueryState) -> Result<()> {
    let mut searches = SavedSearches::load(store);
    searches.save(SavedSearch::capture(name.clone(), query))?;
    println!("{} saved search {:?}", "✓".green(), name);
    Ok(())
}

/// Handle the 'searches' command
fn handle_searches(store: &JsonFileStore) -> Result<()> {
    let searches = SavedSearches::load(store.clone());
    if searches.list().is_empty() {
        println!("no saved searches yet");
        return Ok(());
    }

    for search in searches.list() {
        let pairs: Vec<String> = search
            .to_query()
            .to_params()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        let summary = if pairs.is_empty() {
            "(unconstrained)".to_string()
        } else {
            pairs.join("&")
        };
        println!("{}: {}", search.name.bold(), summary.cyan());
    }
    Ok(())
}

/// Handle the 'delete-search' command
fn handle_delete_search(store: JsonFileStore, name: String) -> Result<()> {
    let mut searches = SavedSearches::load(store);
    if searches.remove(&name)? {
        println!("{} deleted saved search {:?}", "✓".green(), name);
    } else {
        println!("no saved search named {name:?}");
    }
    Ok(())
}
