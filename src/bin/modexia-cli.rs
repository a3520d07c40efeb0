use clap::{Parser, Subcommand};
use modexia_sdk::{ApiClient, ClientError};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "modexia-cli")]
#[command(about = "Query the Modexia ISP Enterprise API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000", env = "MODEXIA_URL")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the service banner
    Info,
    /// Show service health and record counts
    Health,
    /// List customers
    Customers {
        /// Active, Suspended, Churned or Trial
        #[arg(long)]
        status: Option<String>,
    },
    /// List employees
    Employees,
    /// List invoices
    Invoices {
        /// Paid, Overdue, Pending or Failed
        #[arg(long)]
        status: Option<String>,
    },
    /// List support tickets
    Tickets {
        /// Critical, High, Medium or Low
        #[arg(long)]
        priority: Option<String>,
        /// Open, "In Progress", Resolved or Closed
        #[arg(long)]
        status: Option<String>,
    },
    /// List network infrastructure nodes
    Network,
    /// List equipment inventory
    Equipment,
    /// Show SLA metrics
    Sla,
    /// List vendor contracts
    Vendors,
    /// Show bandwidth usage
    Bandwidth,
    /// Show the product catalog
    Products,
}

impl Commands {
    /// Route path and query pairs for this command.
    fn request(&self) -> (&'static str, Vec<(&'static str, &str)>) {
        fn opt<'a>(key: &'static str, value: &'a Option<String>) -> Option<(&'static str, &'a str)> {
            value.as_deref().map(|v| (key, v))
        }

        match self {
            Commands::Info => ("/", vec![]),
            Commands::Health => ("/health", vec![]),
            Commands::Customers { status } => {
                ("/customers", opt("status", status).into_iter().collect())
            }
            Commands::Employees => ("/employees", vec![]),
            Commands::Invoices { status } => {
                ("/invoices", opt("status", status).into_iter().collect())
            }
            Commands::Tickets { priority, status } => (
                "/tickets",
                opt("priority", priority)
                    .into_iter()
                    .chain(opt("status", status))
                    .collect(),
            ),
            Commands::Network => ("/network-infrastructure", vec![]),
            Commands::Equipment => ("/equipment-inventory", vec![]),
            Commands::Sla => ("/sla-metrics", vec![]),
            Commands::Vendors => ("/vendor-contracts", vec![]),
            Commands::Bandwidth => ("/bandwidth-usage", vec![]),
            Commands::Products => ("/products", vec![]),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.url);

    let (path, query) = cli.command.request();
    match client.get_json::<Value>(path, &query).await {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(ClientError::Status { status, body }) => {
            eprintln!("Error: API returned status {}", status);
            eprintln!("Response: {}", body);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
