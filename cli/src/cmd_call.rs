//! `chaincall call`: encode a view call, show the `eth_call` request and
//! optionally send it and decode the reply.

use anyhow::{Context, Result};
use std::io::Write;

use chaincall_core::{
    format_values, CallEncoder, EncodedCall, FormattedValue, LogTrace, ReturnDecoder,
};
use chaincall_rpc::{
    call_result, curl_command, eth_call_request, HttpTransport, JsonRpcRequest, RpcTransport,
};

use crate::config::CliConfig;

/// An encoded call wrapped in its JSON-RPC envelope.
#[derive(Debug, Clone)]
pub struct PreparedCall {
    pub call: EncodedCall,
    pub request: JsonRpcRequest,
    pub curl: String,
}

/// Encode `signature(args...)` against contract `to` and build the request.
pub fn prepare<S: AsRef<str>>(
    cfg: &CliConfig,
    rpc_url: &str,
    to: &str,
    signature: &str,
    args: &[S],
) -> Result<PreparedCall> {
    let call = CallEncoder::new()
        .with_trace(&LogTrace)
        .encode_str(signature, args)
        .context("error encoding function call")?;
    let request = eth_call_request(cfg.request_id, to.trim(), call.data_hex(), &cfg.block);
    let curl = curl_command(rpc_url, &request).context("error creating JSON request")?;
    Ok(PreparedCall { call, request, curl })
}

/// Send the request, print the raw response, and decode its result.
///
/// An empty result (`"0x"`) against an empty return list decodes to nothing.
pub async fn execute<T, W>(
    transport: &T,
    prepared: &PreparedCall,
    return_types: &str,
    out: &mut W,
) -> Result<Vec<FormattedValue>>
where
    T: RpcTransport + ?Sized,
    W: Write,
{
    tracing::info!(url = transport.url(), signature = %prepared.call.signature, "executing eth_call");
    let response = transport
        .send(prepared.request.clone())
        .await
        .context("error executing request")?;

    writeln!(out, "\nRaw Response:")?;
    writeln!(out, "{}", serde_json::to_string(&response)?)?;

    let raw = call_result(response).context("eth_call failed")?;
    let values = ReturnDecoder::new()
        .with_trace(&LogTrace)
        .decode_str(return_types, &raw)
        .context("error decoding results")?;
    Ok(format_values(&values))
}

pub struct CallArgs<'a> {
    pub to: &'a str,
    pub signature: &'a str,
    pub args: &'a [String],
    pub returns: &'a str,
    pub rpc_url: Option<&'a str>,
    pub execute: bool,
    pub json: bool,
}

pub async fn run(cfg: &CliConfig, opts: CallArgs<'_>) -> Result<()> {
    let rpc_url = opts.rpc_url.unwrap_or(&cfg.rpc_url);
    let prepared = prepare(cfg, rpc_url, opts.to, opts.signature, opts.args)?;

    if opts.json && !opts.execute {
        let out = serde_json::json!({
            "call": prepared.call,
            "request": prepared.request,
            "curl": prepared.curl,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if !opts.json {
        println!("Method ID:    {}", prepared.call.selector_hex());
        println!("Encoded data: {}", prepared.call.data_hex());
        println!("\nRequest:");
        println!("{}", prepared.request.to_json()?);
        println!("\nGenerated curl command:");
        println!("{}", prepared.curl);
    }

    if !opts.execute {
        return Ok(());
    }

    let transport = HttpTransport::new(rpc_url, cfg.http_client_config())
        .with_context(|| format!("cannot create HTTP client for {rpc_url}"))?;

    let mut stdout = std::io::stdout();
    if opts.json {
        let mut sink = std::io::sink();
        let decoded = execute(&transport, &prepared, opts.returns, &mut sink).await?;
        let out = serde_json::json!({ "call": prepared.call, "decoded": decoded });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let decoded = execute(&transport, &prepared, opts.returns, &mut stdout).await?;
        println!("\nDecoded Result:");
        for value in decoded {
            println!("{value}");
        }
    }
    Ok(())
}
