use std::convert::TryFrom;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{ensure, WrapErr};
use console::style;
use huffcode::{FrequencyTable, HuffmanCodec};
use tracing::{debug, info, level_filters::LevelFilter};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twox_hash::XxHash64;

mod progress;
use progress::{fmt_size, ProgressMonitor};

#[derive(Parser)]
#[command(version, about = "Build Huffman codes for the bytes of a file and encode it")]
struct Cli {
    /// Log more, can be repeated (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Count byte frequencies on this many threads
    #[arg(long, default_value_t = 1, global = true)]
    partitions: usize,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the code of every byte in the file and how well the file compresses
    Codes { file: PathBuf },
    /// Write the encoded file as a string of '0' and '1'
    Encode {
        file: PathBuf,
        /// Where to write the bits, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Encode the file, decode it with both the table and the tree and compare checksums
    RoundTrip { file: PathBuf },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Codes { file } => print_codes(&file, cli.partitions),
        Command::Encode { file, output } => encode(&file, output.as_deref(), cli.partitions),
        Command::RoundTrip { file } => round_trip(&file, cli.partitions),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let indicatif_layer = IndicatifLayer::new();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .with(level)
        .init();
}

fn read_input(path: &Path) -> color_eyre::Result<Vec<u8>> {
    let file =
        File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
    let len = file
        .metadata()
        .wrap_err_with(|| format!("failed to stat {}", path.display()))?
        .len();
    // only a capacity hint and the progress total
    let size = usize::try_from(len).unwrap_or(usize::MAX);

    let mut data = Vec::new();
    data.try_reserve_exact(size)
        .wrap_err_with(|| format!("{} does not fit into memory", path.display()))?;
    ProgressMonitor::new(file, size)
        .read_to_end(&mut data)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    ensure!(!data.is_empty(), "{} is empty, there is nothing to encode", path.display());
    Ok(data)
}

fn build_codec(
    data: &[u8],
    partitions: usize,
) -> color_eyre::Result<(FrequencyTable<u8>, HuffmanCodec<u8>)> {
    let frequencies = FrequencyTable::count_partitioned(data, partitions)?;
    debug!(partitions, unique = frequencies.len(), "counted byte frequencies");
    let codec = HuffmanCodec::from_frequencies(&frequencies)?;
    Ok((frequencies, codec))
}

/// Printable ASCII as is, everything else as hex
fn fmt_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", byte as char)
    } else {
        format!("0x{:02x}", byte)
    }
}

fn print_codes(path: &Path, partitions: usize) -> color_eyre::Result<()> {
    let data = read_input(path)?;
    let (frequencies, codec) = build_codec(&data, partitions)?;

    let mut rows: Vec<_> = codec
        .codes()
        .iter()
        .map(|(byte, code)| (*byte, frequencies.get(byte).unwrap_or(0), code))
        .collect();
    rows.sort_by(|(a_byte, _, a_code), (b_byte, _, b_code)| {
        a_code.len().cmp(&b_code.len()).then(a_byte.cmp(b_byte))
    });

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "{}", style(format!("{:<8}{:>12}  code", "symbol", "count")).bold())?;
    for (byte, count, code) in rows {
        writeln!(out, "{:<8}{:>12}  {}", fmt_byte(byte), count, code)?;
    }

    let encoded_bits = codec.tree().weighted_path_length();
    writeln!(out)?;
    writeln!(
        out,
        "{} {} in, {} unique symbols, longest code {} bits",
        style("input:").bold(),
        fmt_size(data.len() as f64),
        frequencies.len(),
        codec.codes().max_code_length(),
    )?;
    writeln!(
        out,
        "{} {} bits ({}), {:.3} bits per symbol, {} of the input",
        style("encoded:").bold(),
        encoded_bits,
        fmt_size(encoded_bits.div_ceil(8) as f64),
        encoded_bits as f64 / data.len() as f64,
        style(format!(
            "{:.1}%",
            100.0 * encoded_bits as f64 / (8 * data.len()) as f64
        ))
        .green(),
    )?;
    out.flush()?;
    Ok(())
}

fn encode(path: &Path, output: Option<&Path>, partitions: usize) -> color_eyre::Result<()> {
    let data = read_input(path)?;
    let (_, codec) = build_codec(&data, partitions)?;
    let bits = codec.encode(&data)?;

    let mut out: Box<dyn Write> = match output {
        Some(output) => Box::new(BufWriter::new(
            File::create(output)
                .wrap_err_with(|| format!("failed to create {}", output.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    write!(out, "{}", bits)?;
    if output.is_none() {
        writeln!(out)?;
    }
    out.flush()?;

    info!(
        "encoded {} into {} bits",
        fmt_size(data.len() as f64),
        bits.len()
    );
    Ok(())
}

fn round_trip(path: &Path, partitions: usize) -> color_eyre::Result<()> {
    let data = read_input(path)?;
    let (_, codec) = build_codec(&data, partitions)?;
    let bits = codec.encode(&data)?;
    debug!(bits = bits.len(), "encoded input");

    let expected = XxHash64::oneshot(0, &data);
    let from_table = codec.decode(&bits).wrap_err("decoding with the code table failed")?;
    let from_tree = codec
        .decode_with_tree(&bits)
        .wrap_err("decoding with the tree failed")?;

    for (decoder, decoded) in [("code table", &from_table), ("tree", &from_tree)] {
        let checksum = XxHash64::oneshot(0, decoded);
        ensure!(
            checksum == expected,
            "decoding with the {} produced checksum {:016x}, expected {:016x}",
            decoder,
            checksum,
            expected
        );
    }

    println!(
        "{} {} ({} bits, checksum {:016x})",
        style("ok").green().bold(),
        path.display(),
        bits.len(),
        expected
    );
    Ok(())
}
