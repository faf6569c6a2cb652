//! Skylark: human-in-the-loop social agent console.
//!
//! Required environment (a `.env` file is honored):
//! - `ENDPOINT_URL`, `AZURE_OPENAI_API_KEY`, `GPT4O_DEPLOYMENT_NAME`
//! - `BSKYUNAME`, `BSKYPASSWD`

use agent_core::ProfileSet;
use bluesky_client::{BskyClient, BskyConfig};
use openai_chat::ChatClient;
use orchestrator::workflows::{post, reply, search};
use orchestrator::{Console, StdConsole, Toolkit, WorkflowError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("orchestrator=info".parse()?),
        )
        .init();

    let completion = ChatClient::from_env()?;
    let social = BskyClient::login(BskyConfig::from_env()?).await?;
    let profiles = ProfileSet::builtin();
    let console = StdConsole::new();
    info!("skylark started");

    loop {
        console.line("");
        console.line("What would you like to do?");
        console.line("  1. Post a message");
        console.line("  2. Reply to your feed");
        console.line("  3. Search for an account");
        console.line("  4. Exit");

        let choice = match console.prompt("Choose an option:") {
            Ok(choice) => choice,
            Err(WorkflowError::ConsoleClosed) => break,
            Err(e) => return Err(e.into()),
        };

        let tk = Toolkit::new(&console, &completion, &social, &profiles);
        let outcome = match choice.as_str() {
            "1" => post::run(&tk).await,
            "2" => reply::run(&tk).await,
            "3" => search::run(&tk).await,
            "4" | "exit" | "quit" => break,
            _ => {
                console.line("Please choose 1, 2, 3, or 4.");
                continue;
            }
        };

        match outcome {
            Ok(()) => {}
            Err(WorkflowError::ConsoleClosed) => break,
            Err(e) => {
                error!(error = %e, "workflow aborted");
                console.line(&format!("The workflow hit an error: {}", e));
            }
        }
    }

    console.line("Goodbye.");
    Ok(())
}
