use alloy_primitives::{hex, Address};
use log::{debug, LevelFilter};
use std::{env, error::Error};
use stgcodec::{
    config::init_logger, AddressValue, BigIntValue, Config, ProposerRecord, StorageValue,
    StringValue, UInt64Value,
};

const USAGE: &str = "Usage: stgcodec [-v|-vv|-q] <encode|decode> <kind> <value>
kinds: bigint, proposer (<address>:<status>), string, address, uint64";

fn parse_proposer(input: &str) -> Result<ProposerRecord, Box<dyn Error>> {
    let (address, status) = input.split_once(':').ok_or("proposer must be <address>:<status>")?;
    Ok(ProposerRecord::new(address.parse()?, status.parse()?))
}

fn encode(kind: &str, input: &str) -> Result<String, Box<dyn Error>> {
    let data = match kind {
        "bigint" => input.parse::<BigIntValue>()?.encode()?,
        "proposer" => parse_proposer(input)?.encode()?,
        "string" => StringValue::from(input).encode()?,
        "address" => AddressValue(input.parse::<Address>()?).encode()?,
        "uint64" => UInt64Value(input.parse()?).encode()?,
        _ => return Err(format!("unknown kind {kind}\n{USAGE}").into()),
    };
    debug!("encoded {kind} {input:?} into {} bytes", data.len());
    Ok(hex::encode_prefixed(data))
}

fn decode(kind: &str, input: &str) -> Result<String, Box<dyn Error>> {
    let data = hex::decode(input)?;
    debug!("decoding {} bytes as {kind}", data.len());
    let value = match kind {
        "bigint" => BigIntValue::decode(&data)?.to_string(),
        "proposer" => {
            let record = ProposerRecord::decode(&data)?;
            format!("{}:{}", record.address, record.status)
        }
        "string" => StringValue::decode(&data)?.to_string(),
        "address" => AddressValue::decode(&data)?.to_string(),
        "uint64" => UInt64Value::decode(&data)?.to_string(),
        _ => return Err(format!("unknown kind {kind}\n{USAGE}").into()),
    };
    Ok(value)
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1).peekable();

    let mut log_level = LevelFilter::Warn;
    while let Some(flag) = args.next_if(|arg| arg.starts_with('-')) {
        log_level = match flag.as_str() {
            "-v" => LevelFilter::Debug,
            "-vv" => LevelFilter::Trace,
            "-q" => LevelFilter::Off,
            _ => return Err(USAGE.into()),
        };
    }
    init_logger(&Config::new().with_log_level(log_level))?;

    let command = args.next().ok_or(USAGE)?;
    let kind = args.next().ok_or(USAGE)?;
    let input = args.next().ok_or(USAGE)?;

    let output = match command.as_str() {
        "encode" => encode(&kind, &input)?,
        "decode" => decode(&kind, &input)?,
        _ => return Err(USAGE.into()),
    };
    println!("{output}");

    Ok(())
}
