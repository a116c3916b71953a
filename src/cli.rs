// command line interface

use crate::core::DEFAULT_API_URL;
use crate::output::Output;
use crate::{ApiClient, DrugQuery, QueryType};
use clap::Parser;
use miette::Result;

#[derive(Parser)]
#[command(name = "medcheck", about = "Check drug interactions in plain english")]
struct Cli {
    /// free-text question about your medications (omit for interactive mode)
    query: Option<String>,

    /// what to ask about
    #[arg(long, short = 't', value_enum, default_value_t = QueryType::Interaction)]
    query_type: QueryType,

    /// look up specific drug names instead of free text
    #[arg(long, short = 'd', value_delimiter = ',')]
    drugs: Vec<String>,

    /// base url of the interaction service
    #[arg(long, env = "MEDCHECK_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// print the raw json response
    #[arg(long)]
    json: bool,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = ApiClient::new(cli.api_url);

    // one-shot mode when a query or drug list was given
    if !cli.drugs.is_empty() {
        let query = DrugQuery::names(cli.drugs);
        return fetch_and_print(&client, &query, cli.json).await;
    }

    match cli.query {
        Some(text) => {
            if text.trim().is_empty() {
                return Err(miette::miette!("query must not be empty"));
            }
            let query = DrugQuery::text(text, cli.query_type);
            fetch_and_print(&client, &query, cli.json).await
        }

        // no query: interactive TUI
        None => Ok(crate::tui::run(client, cli.query_type).await?),
    }
}

async fn fetch_and_print(client: &ApiClient, query: &DrugQuery, json: bool) -> Result<()> {
    let result = client.check_interactions(query).await?;
    if json {
        Output::raw(&result);
    } else {
        Output::pretty(&result);
    }
    Ok(())
}
