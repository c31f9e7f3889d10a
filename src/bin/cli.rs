//! orderwire CLI
//!
//! Encode JSON records to hex, decode hex back to JSON, and inspect raw
//! field layouts without a schema.

use std::io::Read;

use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use orderwire::order::{
    EmptyResp, GetOrderByIdReq, ListOrderReq, ListOrderResp, Order, OrderAttachment,
};
use orderwire::{message, wire, Config, DecodeOptions, Message, Result, UnknownFieldPolicy};

/// orderwire CLI
#[derive(Parser, Debug)]
#[command(name = "orderwire-cli")]
#[command(about = "Encode, decode and inspect order-service wire messages")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a JSON record (bare or as printed by `decode`) and print it as hex
    Encode {
        /// Record type
        #[arg(short, long, value_enum)]
        record: RecordKind,

        /// JSON file to read, or '-' for stdin
        #[arg(short, long, default_value = "-")]
        json: String,
    },

    /// Decode a hex buffer and print the record and its unknown fields as JSON
    Decode {
        /// Record type
        #[arg(short, long, value_enum)]
        record: RecordKind,

        /// Hex-encoded message
        #[arg(long)]
        hex: String,

        /// Unknown field handling (overrides ORDERWIRE_UNKNOWN_FIELDS)
        #[arg(long, value_enum)]
        unknown_fields: Option<PolicyArg>,
    },

    /// List the top-level fields of a hex buffer without a schema
    Inspect {
        /// Hex-encoded message
        #[arg(long)]
        hex: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RecordKind {
    Order,
    GetOrderByIdReq,
    ListOrderReq,
    ListOrderResp,
    OrderAttachment,
    EmptyResp,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Preserve,
    Discard,
}

impl From<PolicyArg> for UnknownFieldPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Preserve => UnknownFieldPolicy::Preserve,
            PolicyArg::Discard => UnknownFieldPolicy::Discard,
        }
    }
}

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    // Logs go to stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("orderwire CLI v{} ({})", orderwire::VERSION, config.environment);

    if let Err(e) = run(args.command, &config) {
        tracing::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Encode { record, json } => {
            let input = read_input(&json)?;
            let bytes = match record {
                RecordKind::Order => encode_json::<Order>(&input)?,
                RecordKind::GetOrderByIdReq => encode_json::<GetOrderByIdReq>(&input)?,
                RecordKind::ListOrderReq => encode_json::<ListOrderReq>(&input)?,
                RecordKind::ListOrderResp => encode_json::<ListOrderResp>(&input)?,
                RecordKind::OrderAttachment => encode_json::<OrderAttachment>(&input)?,
                RecordKind::EmptyResp => encode_json::<EmptyResp>(&input)?,
            };
            println!("{}", hex::encode(bytes));
        }
        Commands::Decode {
            record,
            hex: input,
            unknown_fields,
        } => {
            let bytes = hex::decode(input.trim())?;
            let mut options = config.decode_options();
            if let Some(policy) = unknown_fields {
                options = options.unknown_fields(policy.into());
            }
            let output = match record {
                RecordKind::Order => decode_json::<Order>(&bytes, &options)?,
                RecordKind::GetOrderByIdReq => decode_json::<GetOrderByIdReq>(&bytes, &options)?,
                RecordKind::ListOrderReq => decode_json::<ListOrderReq>(&bytes, &options)?,
                RecordKind::ListOrderResp => decode_json::<ListOrderResp>(&bytes, &options)?,
                RecordKind::OrderAttachment => decode_json::<OrderAttachment>(&bytes, &options)?,
                RecordKind::EmptyResp => decode_json::<EmptyResp>(&bytes, &options)?,
            };
            println!("{}", output);
        }
        Commands::Inspect { hex: input } => {
            let bytes = hex::decode(input.trim())?;
            for field in wire::fields(&bytes) {
                let field = field?;
                println!(
                    "offset={:<6} field={:<6} wire_type={:<22} payload_len={}",
                    field.offset,
                    field.tag.field_number,
                    field.tag.wire_type.to_string(),
                    field.payload().len()
                );
            }
        }
    }
    Ok(())
}

fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}

fn encode_json<M>(input: &str) -> Result<Vec<u8>>
where
    M: Message + DeserializeOwned,
{
    let record: M = message::from_json(input)?;
    let bytes = record.encode_to_vec();
    tracing::debug!(record = M::NAME, len = bytes.len(), "encoded");
    Ok(bytes)
}

fn decode_json<M>(bytes: &[u8], options: &DecodeOptions) -> Result<String>
where
    M: Message + Serialize,
{
    let record: M = orderwire::decode_with(bytes, options)?;

    let unknown = record.unknown_fields();
    if !unknown.is_empty() {
        tracing::debug!(
            record = M::NAME,
            fields = unknown.field_count(),
            bytes = unknown.len(),
            "record carries unknown fields"
        );
    }

    message::to_json(&record)
}
