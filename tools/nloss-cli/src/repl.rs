//! Parsing and execution of shell lines

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use nloss::{
    Axis, CommandConfig, FlipDirection, ImageBank, NlossResult, Operation, TransformKind,
};

/// One line typed at the prompt
#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct Line {
    /// Image slot (0 - 15)
    #[arg(short = 'n', global = true, default_value_t = 0, allow_hyphen_values = true)]
    pub slot: i64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BlockArgs {
    /// Block width (default: image width)
    #[arg(long = "sx", allow_hyphen_values = true)]
    pub sx: Option<i64>,

    /// Block height (default: image height)
    #[arg(long = "sy", allow_hyphen_values = true)]
    pub sy: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct SizeArgs {
    /// Mandatory size parameter
    #[arg(short = 's', allow_hyphen_values = true)]
    pub size: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct TransformArgs {
    /// h, v or d
    #[arg(default_value = "h")]
    pub axis: Axis,

    #[command(flatten)]
    pub blocks: BlockArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Load { file: PathBuf },
    Save { file: PathBuf },
    Info,
    Clear,
    Invert,
    Grayscale,
    Flip {
        #[arg(default_value = "horizontal")]
        direction: FlipDirection,
    },
    #[command(name = "abs")]
    Absolute,
    Fit,
    #[command(name = "quant")]
    Quantize(SizeArgs),
    Cutoff(SizeArgs),
    Level(BlockArgs),
    #[command(flatten)]
    Transform(TransformCommand),
    Help,
    #[command(alias = "quit")]
    Exit,
}

#[derive(Subcommand, Debug)]
pub enum TransformCommand {
    Fft(TransformArgs),
    Ifft(TransformArgs),
    Dft(TransformArgs),
    Idft(TransformArgs),
    Dct(TransformArgs),
    Idct(TransformArgs),
    Dst(TransformArgs),
    Idst(TransformArgs),
    Wht(TransformArgs),
    Iwht(TransformArgs),
}

impl TransformCommand {
    fn split(&self) -> (TransformKind, &TransformArgs) {
        match self {
            TransformCommand::Fft(args) => (TransformKind::Fft, args),
            TransformCommand::Ifft(args) => (TransformKind::Ifft, args),
            TransformCommand::Dft(args) => (TransformKind::Dft, args),
            TransformCommand::Idft(args) => (TransformKind::Idft, args),
            TransformCommand::Dct(args) => (TransformKind::Dct2, args),
            TransformCommand::Idct(args) => (TransformKind::Idct2, args),
            TransformCommand::Dst(args) => (TransformKind::Dst2, args),
            TransformCommand::Idst(args) => (TransformKind::Idst2, args),
            TransformCommand::Wht(args) => (TransformKind::Wht, args),
            TransformCommand::Iwht(args) => (TransformKind::Iwht, args),
        }
    }
}

/// What the shell does after a line
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Message(String),
    Exit,
}

/// Split a line into arguments, spelling `-sx` and `-sy` as long flags
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace()
        .map(|token| match token {
            "-sx" | "-sy" => format!("-{}", token),
            other => other.to_string(),
        })
        .collect()
}

pub fn parse(line: &str) -> Result<Line, clap::Error> {
    Line::try_parse_from(tokenize(line))
}

fn block_config(config: CommandConfig, blocks: &BlockArgs) -> CommandConfig {
    let config = match blocks.sx {
        Some(sx) => config.block_width(sx),
        None => config,
    };
    match blocks.sy {
        Some(sy) => config.block_height(sy),
        None => config,
    }
}

fn size_config(config: CommandConfig, size: &SizeArgs) -> CommandConfig {
    match size.size {
        Some(s) => config.size(s),
        None => config,
    }
}

/// Run one parsed line against the bank
pub fn execute(bank: &mut ImageBank, line: Line) -> NlossResult<Outcome> {
    let config = CommandConfig::new().slot(line.slot);

    let (op, config) = match line.command {
        Command::Load { file } => {
            let dims = bank.load_file(config.slot_index()?, &file)?;
            return Ok(Outcome::Message(format!(
                "Successfully loaded BMP image: {} ({}x{})",
                file.display(),
                dims.width,
                dims.height
            )));
        }
        Command::Save { file } => {
            bank.save_file(config.slot_index()?, &file)?;
            return Ok(Outcome::Message(format!(
                "Successfully saved BMP image: {}",
                file.display()
            )));
        }
        Command::Info => {
            let info = bank.info(config.slot_index()?)?;
            return Ok(Outcome::Message(info.to_string()));
        }
        Command::Clear => {
            let slot = config.slot_index()?;
            bank.clear(slot)?;
            return Ok(Outcome::Message(format!("Slot {} cleared", slot)));
        }
        Command::Help => return Ok(Outcome::Message(help_text())),
        Command::Exit => return Ok(Outcome::Exit),
        Command::Invert => (Operation::Invert, config),
        Command::Grayscale => (Operation::Grayscale, config),
        Command::Flip { direction } => (Operation::Flip(direction), config),
        Command::Absolute => (Operation::Absolute, config),
        Command::Fit => (Operation::Fit, config),
        Command::Quantize(size) => (Operation::Quantize, size_config(config, &size)),
        Command::Cutoff(size) => (Operation::Cutoff, size_config(config, &size)),
        Command::Level(blocks) => (Operation::Level, block_config(config, &blocks)),
        Command::Transform(transform) => {
            let (kind, args) = transform.split();
            let config = block_config(config.axis(args.axis), &args.blocks);
            (Operation::Transform(kind), config)
        }
    };

    bank.apply(op, &config).map(Outcome::Message)
}

pub fn help_text() -> String {
    let mut text = String::from("Available commands:\n");
    let fixed = [
        ("load <file>", "Load a 24-bit BMP into the slot"),
        ("save <file>", "Save the slot as a 24-bit BMP"),
        ("info", "Show size, average color and BMP layout"),
        ("clear", "Empty the slot"),
        ("invert", "Invert image colors"),
        ("grayscale", "Convert image to grayscale"),
        ("flip [h | v]", "Mirror horizontally or vertically"),
        ("abs", "Replace samples by their magnitude"),
        ("fit", "Clamp and floor samples to the saved 8-bit values"),
        ("quant -s N", "Quantize real parts to multiples of N"),
        ("cutoff -s N", "Zero samples with magnitude at most N"),
        ("level [-sx N] [-sy N]", "Average each tile"),
    ];
    for (usage, description) in fixed {
        text.push_str(&format!("  {:<34} {}\n", usage, description));
    }
    for kind in TransformKind::ALL {
        let usage = format!("{} [h | v | d] [-sx N] [-sy N]", kind);
        text.push_str(&format!("  {:<34} {}\n", usage, kind.description()));
    }
    text.push_str(&format!("  {:<34} {}\n", "help", "Show this text"));
    text.push_str(&format!("  {:<34} {}\n", "exit | quit", "Leave the shell"));
    text.push_str("\nFlags:\n");
    text.push_str("  -n  :: image slot for the command, 0 - 15 (default = 0)\n");
    text.push_str("  -s  :: mandatory size parameter (no default)\n");
    text.push_str("  -sx :: block width (default = image width)\n");
    text.push_str("  -sy :: block height (default = image height)\n");
    text.push_str("\nSupported format: 24-bit uncompressed BMP files");
    text
}
