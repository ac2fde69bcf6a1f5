use auto_fastfetch::{bootstrap, BootstrapError, Config, HostSystem, Outcome, Progress, TOOL_NAME};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr, filtered by RUST_LOG (default: warn)
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<Outcome, BootstrapError> {
    let config = Config::from_home_dir()?;
    let outcome = bootstrap(&HostSystem, &config, |progress| {
        for line in status_lines(&progress) {
            println!("{line}");
        }
    })
    .await?;
    Ok(outcome)
}

fn report_error(error: &BootstrapError) {
    eprintln!("[x] {error}");
    eprintln!("[i] {}", error.fix_suggestion());
}

/// Console lines printed for each stage.
fn status_lines(progress: &Progress) -> Vec<String> {
    match progress {
        Progress::Started => vec![format!("[+] Starting {TOOL_NAME} installation...")],
        Progress::CheckingDependencies => vec!["[+] Checking dependencies...".to_string()],
        Progress::DependenciesPresent => vec!["[✓] All dependencies are present.".to_string()],
        Progress::DependenciesMissing { missing } => {
            vec![format!("[!] Missing dependencies: {}", missing.join(", "))]
        }
        Progress::Fetching => vec![format!("[+] Downloading and installing {TOOL_NAME}...")],
        Progress::Updating => vec![format!("[i] {TOOL_NAME} is already cloned, updating...")],
        Progress::Running => vec![format!("[+] Running {TOOL_NAME}...\n")],
        Progress::Completed => vec![
            format!("\n[✓] Done. {TOOL_NAME} has been installed and run successfully."),
            "[i] To run it again, just run this program again.".to_string(),
        ],
        Progress::AlreadyInstalled
        | Progress::InstallingDependencies { .. }
        | Progress::Cloning
        | Progress::Building => vec![],
    }
}
