//! `mercury` CLI.
//!
//! - `mercury encode <seq> <requests.json>`: print the transport argument list
//!   for `{"requests": [...], "header": {...}}`.
//! - `mercury decode <header_b64> <body_b64> [config.yaml]`: classify a reply
//!   and decode its metadata body.

use std::fs;
use std::process::ExitCode;

use serde::Deserialize;
use serde_json::json;
use tracing_subscriber::{fmt, EnvFilter};

use mercury_client::metadata::{metadata_decoders, Metadata};
use mercury_client::{config, Collector, LogicalRequest, Operation, Outcome, RecordingTransport, Reply};
use mercury_core::error::{MercuryError, Result};

const USAGE: &str = "usage: mercury encode <seq> <requests.json> | mercury decode <header_b64> <body_b64> [config.yaml]";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RequestFile {
    requests: Vec<LogicalRequest>,
    #[serde(default)]
    header: Option<LogicalRequest>,
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", e.code().as_str());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    match args {
        [cmd, seq, path] if cmd == "encode" => encode(seq, path),
        [cmd, header, body] if cmd == "decode" => decode(header, body, None),
        [cmd, header, body, cfg] if cmd == "decode" => decode(header, body, Some(cfg)),
        _ => Err(MercuryError::Configuration(USAGE.into())),
    }
}

fn encode(seq: &str, path: &str) -> Result<()> {
    let seq: u64 = seq
        .parse()
        .map_err(|_| MercuryError::Configuration(format!("invalid sequence number: {seq}")))?;
    let raw = fs::read_to_string(path)
        .map_err(|e| MercuryError::Configuration(format!("read {path} failed: {e}")))?;
    let file: RequestFile = serde_json::from_str(&raw)
        .map_err(|e| MercuryError::Configuration(format!("invalid request file: {e}")))?;

    let cfg = config::ClientConfig::default();
    let op: Operation<Metadata> = Operation::new(
        "encode",
        file.requests,
        metadata_decoders(&cfg.metadata).into(),
        file.header,
    )?;

    let transport = RecordingTransport::new();
    op.submit(seq, &transport)?;

    for call in transport.sent() {
        print_json(&json!({ "seq": call.seq, "args": call.to_values() }))?;
    }
    Ok(())
}

fn decode(header: &str, body: &str, cfg_path: Option<&String>) -> Result<()> {
    let cfg = match cfg_path {
        Some(p) => config::load_from_file(p)?,
        None => config::ClientConfig::default(),
    };

    let op: Operation<Metadata> = Operation::new(
        "decode",
        vec![LogicalRequest::default()],
        metadata_decoders(&cfg.metadata).into(),
        None,
    )?;

    let reply = Reply::from_base64(header, body)?;
    let collector = Collector::new();
    op.process(&reply, &collector);

    for outcome in collector.take() {
        let line = match &outcome {
            Outcome::Success(value) => json!({ "event": outcome.kind(), "value": value }),
            Outcome::Failure(e) => json!({
                "event": outcome.kind(),
                "code": e.code().as_str(),
                "message": e.to_string(),
            }),
        };
        print_json(&line)?;
    }
    Ok(())
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    let s = serde_json::to_string(value)
        .map_err(|e| MercuryError::Internal(format!("json encode failed: {e}")))?;
    println!("{s}");
    Ok(())
}
