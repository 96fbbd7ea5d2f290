//! `chaincall interactive`: the guided prompt loop.
//!
//! Reads answers line by line from any `BufRead` and writes prompts to any
//! `Write`, so the whole session can be driven from a test.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

use chaincall_core::FunctionSignature;
use chaincall_rpc::{HttpTransport, RpcTransport};

use crate::cmd_call::{execute, prepare};
use crate::config::CliConfig;

/// What the user typed before anything was encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub to: String,
    pub signature: String,
    pub return_types: String,
    pub args: Vec<String>,
    pub rpc_url: String,
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("cannot read from stdin")? == 0 {
        bail!("input closed");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Collect the contract, signature, return types, one value per parameter
/// and the RPC URL (blank keeps `default_rpc_url`).
pub fn collect_answers<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default_rpc_url: &str,
) -> Result<Answers> {
    let to = ask(input, out, "Enter contract address: ")?;
    let signature = ask(input, out, "Enter function signature (e.g., getBalance(address)): ")?;
    let sig = FunctionSignature::parse(&signature).context("error parsing function signature")?;
    let return_types = ask(input, out, "Enter return type (e.g., (uint256,address)): ")?;

    let mut args = Vec::with_capacity(sig.params.len());
    for (i, ty) in sig.params.iter().enumerate() {
        args.push(ask(input, out, &format!("Enter value for parameter {} ({ty}): ", i + 1))?);
    }

    let rpc_url = ask(
        input,
        out,
        &format!("Enter Ethereum RPC URL (default: {default_rpc_url}): "),
    )?;
    let rpc_url = match rpc_url.trim() {
        "" => default_rpc_url.to_string(),
        url => url.to_string(),
    };

    Ok(Answers {
        to,
        signature,
        return_types,
        args,
        rpc_url,
    })
}

/// Run one session. `connect` builds the transport once the user agrees to
/// execute the request.
pub async fn run_session<R, W, C, T>(
    cfg: &CliConfig,
    input: &mut R,
    out: &mut W,
    connect: C,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: FnOnce(&str) -> Result<T>,
    T: RpcTransport,
{
    let answers = collect_answers(input, out, &cfg.rpc_url)?;
    let prepared = prepare(cfg, &answers.rpc_url, &answers.to, &answers.signature, &answers.args)?;

    writeln!(out, "Method ID: {}", prepared.call.selector_hex())?;
    writeln!(out, "Encoded data: {}", prepared.call.data_hex())?;
    writeln!(out, "\nGenerated curl command:")?;
    writeln!(out, "{}", prepared.curl)?;

    let reply = ask(input, out, "\nDo you want to execute this command? (y/n): ")?;
    if !matches!(reply.trim().to_lowercase().as_str(), "y" | "yes") {
        return Ok(());
    }

    let transport = connect(&answers.rpc_url)?;
    let decoded = execute(&transport, &prepared, &answers.return_types, out).await?;
    writeln!(out, "\nDecoded Result:")?;
    for value in decoded {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

pub async fn run(cfg: &CliConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    let http = cfg.http_client_config();
    run_session(cfg, &mut input, &mut out, |url| {
        HttpTransport::new(url, http).with_context(|| format!("cannot create HTTP client for {url}"))
    })
    .await
}
