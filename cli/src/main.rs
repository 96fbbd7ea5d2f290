//! ChainCall CLI: encode read-only contract calls, build the `eth_call`
//! request, and decode what the node sends back.
//!
//! # Commands
//! ```text
//! chaincall selector    <signature>
//! chaincall encode      <signature> [args...]
//! chaincall decode      <return-types> <hex>
//! chaincall call        --to <addr> <signature> [args...] --returns <types> [--execute]
//! chaincall interactive
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use chaincall_core::{decode_return, CallEncoder, FunctionSignature, LogTrace};

mod cmd_call;
mod cmd_interactive;
mod config;
mod logging;

use config::CliConfig;

#[derive(Parser)]
#[command(
    name = "chaincall",
    about = "Encode EVM view-function calls and decode their return data",
    long_about = "
ChainCall: turn `name(type,...)` plus literal arguments into eth_call data,
print the JSON-RPC request and an equivalent curl command, and decode the
returned hex into readable values.

ENVIRONMENT VARIABLES:
  CHAINCALL_RPC_URL   Default JSON-RPC endpoint (default: http://localhost:8545)
  RUST_LOG-style directives may be passed with --log-level
",
    version
)]
struct Cli {
    /// Enable debug logging (selector and encoding steps)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log filter, e.g. `info` or `warn,chaincall_core=trace`
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 4-byte selector of a function signature
    Selector {
        /// e.g. `transfer(address,uint256)`
        signature: String,
    },

    /// Encode call data from a signature and literal arguments
    Encode {
        signature: String,
        /// One literal per parameter, in order
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode return data against a list of types
    Decode {
        /// e.g. `(uint256,address)`
        return_types: String,
        /// The `result` hex of an eth_call response
        hex: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build an eth_call request, and optionally send it
    Call {
        /// Contract address
        #[arg(long)]
        to: String,
        signature: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
        /// Return types used to decode the reply
        #[arg(long, default_value = "()")]
        returns: String,
        /// RPC URL (overrides env CHAINCALL_RPC_URL)
        #[arg(long)]
        rpc_url: Option<String>,
        /// Block tag or number
        #[arg(long)]
        block: Option<String>,
        /// Send the request and decode the response
        #[arg(long)]
        execute: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prompt for every input, show the request, and optionally send it
    Interactive {
        /// Default RPC URL offered at the prompt
        #[arg(long)]
        rpc_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = CliConfig::from_env();
    if let Some(level) = cli.log_level {
        cfg.log.level = level;
    } else if cli.verbose {
        cfg.log.level = "debug".into();
    }
    cfg.log.json |= cli.json_logs;
    logging::init_tracing(&cfg.log);

    match cli.command {
        Commands::Selector { signature } => cmd_selector(&signature),

        Commands::Encode { signature, args, json } => cmd_encode(&signature, &args, json),

        Commands::Decode { return_types, hex, json } => cmd_decode(&return_types, &hex, json),

        Commands::Call { to, signature, args, returns, rpc_url, block, execute, json } => {
            if let Some(block) = block {
                cfg.block = block;
            }
            cmd_call::run(
                &cfg,
                cmd_call::CallArgs {
                    to: &to,
                    signature: &signature,
                    args: &args,
                    returns: &returns,
                    rpc_url: rpc_url.as_deref(),
                    execute,
                    json,
                },
            )
            .await
        }

        Commands::Interactive { rpc_url } => {
            if let Some(url) = rpc_url {
                cfg.rpc_url = url;
            }
            cmd_interactive::run(&cfg).await
        }
    }
}

// ─── Command implementations ─────────────────────────────────────────────────

fn cmd_selector(signature: &str) -> Result<()> {
    let sig = FunctionSignature::parse(signature)?;
    println!("0x{}", sig.selector().to_hex());
    Ok(())
}

fn cmd_encode(signature: &str, args: &[String], as_json: bool) -> Result<()> {
    let call = CallEncoder::new()
        .with_trace(&LogTrace)
        .encode_str(signature, args)
        .context("error encoding function call")?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&call)?);
    } else {
        println!("Signature: {}", call.signature);
        println!("Method ID: {}", call.selector_hex());
        println!("Encoded data: {}", call.data_hex());
    }
    Ok(())
}

fn cmd_decode(return_types: &str, hex: &str, as_json: bool) -> Result<()> {
    let values = decode_return(return_types, hex).context("error decoding results")?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for value in &values {
            println!("{value}");
        }
    }
    Ok(())
}
