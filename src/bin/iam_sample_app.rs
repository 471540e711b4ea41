use anyhow::Result;
use clap::Parser;
use iam_sample_app::{
    connect, ops, provision, report, AppConfig, CloudCredential, DeleteOutcome, FilesByUser,
    ResetPolicy, SampleError, ServerEdition,
};
use tracing::Level;
use typedb_driver::Connection;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// configuration file path, by default ./iam-sample.toml is used if present
    #[clap(short, long)]
    config: Option<String>,

    /// Print debug information
    #[clap(long)]
    debug: bool,

    /// TypeDB server address, overrides the configuration file
    #[clap(short, long)]
    address: Option<String>,

    /// Database name, overrides the configuration file
    #[clap(short, long)]
    database: Option<String>,

    /// Server edition (core or cloud), overrides the configuration file
    #[clap(short, long)]
    edition: Option<ServerEdition>,

    /// What to do with a pre-existing database: always, never, or ask
    #[clap(short, long, default_value = "ask")]
    reset_policy: ResetPolicy,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();
    }

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(address) = cli.address {
        config.server_address = address;
    }
    if let Some(database) = cli.database {
        config.database_name = database;
    }
    if let Some(edition) = cli.edition {
        config.edition = edition;
    }

    let credential = CloudCredential::from_config(&config);
    let connection = connect(
        config.edition,
        &config.server_address,
        Some(&credential),
    )
    .map_err(|e| anyhow::anyhow!("Failed to connect to TypeDB server. {e}"))?;

    if !provision::setup(&connection, &config, cli.reset_policy)? {
        anyhow::bail!("Failed to set up the database. Terminating...");
    }

    run_demonstration(&connection, &config.database_name);
    Ok(())
}

/// The six canonical requests, each in its own session and transaction.
/// A failing request is reported and the sequence moves on; nothing here
/// is atomic across requests.
fn run_demonstration(connection: &Connection, database_name: &str) {
    println!("\nRequest 1 of 6: Fetch all users as JSON objects with full names and emails");
    match ops::fetch::all_users(connection, database_name) {
        Ok(users) => {
            for (i, user) in users.iter().enumerate() {
                println!("User #{}", i + 1);
                print!("{}", report::format_document(user));
                println!();
            }
        }
        Err(e) => eprintln!("Fetch failed: {e}"),
    }

    let new_name = "Jack Keeper";
    let new_email = "jk@typedb.com";
    println!("\nRequest 2 of 6: Add a new user with the full-name {new_name} and email {new_email}");
    match ops::insert::new_user(connection, database_name, new_name, new_email) {
        Ok(inserted) => {
            for user in inserted {
                println!("Added new user. Name: {}, E-mail: {}", user.name, user.email);
            }
        }
        Err(e) => eprintln!("Insert failed: {e}"),
    }

    let name = "Kevin Morrison";
    println!("\nRequest 3 of 6: Find all files that the user {name} has access to view (no inference)");
    report_files(ops::access::files_by_user(connection, database_name, name, false));

    println!("\nRequest 4 of 6: Find all files that the user {name} has access to view (with inference)");
    report_files(ops::access::files_by_user(connection, database_name, name, true));

    let old_path = "lzfkn.java";
    let new_path = "lzfkn2.java";
    println!("\nRequest 5 of 6: Update the path of a file from {old_path} to {new_path}");
    match ops::update::file_path(connection, database_name, old_path, new_path) {
        Ok(0) => println!("No matched paths: nothing to update."),
        Ok(count) => println!("Total number of paths updated: {count}."),
        Err(e) => eprintln!("Update failed: {e}"),
    }

    let path = "lzfkn2.java";
    println!("\nRequest 6 of 6: Delete the file with path {path}");
    match ops::delete::file(connection, database_name, path) {
        Ok(DeleteOutcome::Deleted) => println!("The file has been deleted."),
        Ok(DeleteOutcome::NotFound) => {
            println!("No files matched in the database.");
            println!("No files were deleted.");
        }
        Ok(DeleteOutcome::Ambiguous(_)) => {
            println!("Matched more than one file with the same path.");
            println!("No files were deleted.");
        }
        Err(e) => eprintln!("Delete failed: {e}"),
    }
}

fn report_files(result: Result<FilesByUser, SampleError>) {
    match result {
        Ok(FilesByUser::Files(files)) if files.is_empty() => {
            println!("No files found. Try enabling inference.");
        }
        Ok(FilesByUser::Files(files)) => {
            for (i, file) in files.iter().enumerate() {
                println!("File #{}: {}", i + 1, file);
            }
        }
        Ok(FilesByUser::NoSuchUser) => println!("Error: No users found with that name."),
        Ok(FilesByUser::Ambiguous) => println!("Error: Found more than one user with that name."),
        Err(e) => eprintln!("File lookup failed: {e}"),
    }
}
