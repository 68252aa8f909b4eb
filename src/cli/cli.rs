use std::{collections::HashSet, time::Duration};

use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use openominoes::{is_valid, PminoFile, Point, Polyomino, RawPolyomino};

mod enumerate;
use enumerate::enumerate;

fn finish_bar(bar: &ProgressBar, duration: Duration, shapes: usize, n: usize) {
    let time = duration.as_micros();
    let secs = time / 1_000_000;
    let micros = time % 1_000_000;

    bar.finish_with_message(format!(
        "Done! Found {shapes} free polyominoes (N = {n}) in {secs}.{micros:06} s"
    ));
}

fn unknown_bar() -> ProgressBar {
    unknown_bar_with_pos(false)
}

fn unknown_bar_with_pos(with_pos: bool) -> ProgressBar {
    let template = if with_pos {
        "[{elapsed_precise}] [{spinner:10.cyan/blue}] {pos} {msg}"
    } else {
        "[{elapsed_precise}] [{spinner:10.cyan/blue}] {msg}"
    };

    let style = ProgressStyle::with_template(template)
        .unwrap()
        .tick_strings(&[
            ">---------",
            "=>--------",
            "<=>-------",
            "-<=>------",
            "--<=>-----",
            "---<=>----",
            "----<=>---",
            "-----<=>--",
            "------<=>-",
            "-------<=>",
            "--------<=",
            "---------<",
            "--------<=",
            "-------<=>",
            "------<=>-",
            "-----<=>--",
            "---<=>----",
            "--<=>-----",
            "-<=>------",
            "<=>-------",
            "=>--------",
        ]);

    let bar = ProgressBar::new(100).with_style(style);

    bar.enable_steady_tick(Duration::from_millis(66));

    bar
}

pub fn make_bar(len: u64) -> indicatif::ProgressBar {
    let bar = ProgressBar::new(len);

    let pos_width = format!("{len}").len();

    let template = format!(
        "[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}}"
    );

    bar.set_style(
        ProgressStyle::with_template(&template)
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}

#[derive(Clone, Parser)]
pub enum Opts {
    /// Enumerate free polyominoes with a specific amount of cells present
    Enumerate(EnumerateOpts),
    /// Check a drawn cell set against the shapes in a catalog file
    Check(CheckArgs),
    /// Perform operations on pmino files
    #[clap(subcommand)]
    Pmino(PminoCommands),
}

#[derive(Clone, Args)]
pub struct EnumerateOpts {
    /// The N value for which to enumerate all free polyominoes.
    pub n: usize,

    /// Enumerate every size from 1 up to and including N
    #[clap(long, short = 'a')]
    pub all: bool,

    /// Don't write catalog cache files
    #[clap(long, short = 'c')]
    pub no_cache: bool,

    /// Compress written cache files
    #[clap(long, short = 'z', value_enum, default_value = "none")]
    pub cache_compression: Compression,
}

#[derive(Clone, Subcommand)]
pub enum PminoCommands {
    Validate(ValidateArgs),
    Info {
        #[clap(required = true)]
        path: Vec<String>,
    },
}

#[derive(Clone, Args)]
pub struct ValidateArgs {
    /// The path of the pmino file to check
    pub path: String,

    /// Don't validate that all polyominoes in the file are unique
    /// as free polyominoes
    #[clap(short = 'u', long)]
    pub no_uniqueness: bool,

    /// Don't validate that every polyomino in the file is edge-connected
    #[clap(short = 'k', long)]
    pub no_connectivity: bool,

    /// Don't validate that all of the shapes in the file are canonical if
    /// the file header indicates that they should be
    #[clap(short = 'c', long)]
    pub no_canonical: bool,

    /// Validate that all polyominoes in the file have exactly N
    /// cells present
    #[clap(long, short)]
    pub n: Option<usize>,
}

#[derive(Clone, Args)]
pub struct CheckArgs {
    /// The path of the catalog file holding the reference shapes
    pub path: String,

    /// The drawn cells, as x,y pairs (e.g. `0,0 1,0 1,1`)
    #[clap(required = true)]
    pub cells: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Compression {
    None,
    Gzip,
}

impl From<Compression> for openominoes::polyominoes::pmino::Compression {
    fn from(value: Compression) -> Self {
        match value {
            Compression::None => openominoes::polyominoes::pmino::Compression::None,
            Compression::Gzip => openominoes::polyominoes::pmino::Compression::Gzip,
        }
    }
}

pub fn validate(opts: &ValidateArgs) -> std::io::Result<()> {
    let path = &opts.path;
    let uniqueness = !opts.no_uniqueness;
    let connectivity = !opts.no_connectivity;
    let validate_canonical = !opts.no_canonical;
    let n = opts.n;

    let file = PminoFile::new_file(path)?;
    let canonical = file.canonical();
    let len = file.len();

    let bar = if let Some(len) = len {
        make_bar(len as u64)
    } else {
        unknown_bar_with_pos(true)
    };

    bar.set_message("shapes validated");

    bar.println(format!("Validating {}", path));

    let mut seen = if uniqueness {
        bar.println("Verifying uniqueness.");
        Some(HashSet::new())
    } else {
        bar.println("Not verifying uniqueness");
        None
    };

    let exit = |msg: &str| {
        bar.abandon();
        println!("{msg}");
        std::process::exit(1);
    };

    match (canonical, validate_canonical) {
        (true, true) => bar.println("Verifying entry canonicality. File indicates that entries are canonical."),
        (false, true) => bar.println("Not verifying entry canonicality. File header does not indicate that entries are canonical"),
        (true, false) => bar.println("Not verifying entry canonicality. File header indicates that they are, but check is disabled."),
        (false, false) => bar.println("Not verifying canonicality. File header does not indicate that entries are canonical, and check is disabled.")
    }

    if let Some(n) = n {
        bar.println(format!("Verifying that all entries are N = {n}"));
    }

    let mut total_read = 0;

    for shape in file {
        let raw = match shape {
            Ok(s) => s,
            Err(e) => {
                println!("Error: Reading the file failed. Error: {e}.");
                std::process::exit(1);
            }
        };

        total_read += 1;

        bar.inc(1);

        let shape = Polyomino::from(&raw);

        if canonical && validate_canonical && RawPolyomino::from(&shape) != raw {
            exit(
                "Error: Found non-canonical polyomino in file that claims to contain canonical shapes."
            );
        }

        if connectivity && !openominoes::is_connected(shape.cells()) {
            exit("Error: Found a polyomino that is not edge-connected.");
        }

        if let Some(n) = n {
            let v = shape.size();
            if v != n {
                exit(&format!("Error: Found a shape with N != {n}. Value: {v}"));
            }
        }

        if let Some(seen) = &mut seen {
            if shape.transformations().iter().any(|t| seen.contains(t)) {
                exit("Found non-unique polyominoes.");
            }
            seen.insert(shape);
        }
    }

    bar.finish();

    println!("Success: {path}, containing {total_read} shapes, is valid");

    Ok(())
}

fn parse_cell(arg: &str) -> Point {
    let parsed = arg.split_once(',').and_then(|(x, y)| {
        let x = x.trim().parse().ok()?;
        let y = y.trim().parse().ok()?;
        Some(Point::new(x, y))
    });

    match parsed {
        Some(p) => p,
        None => {
            println!("Invalid cell `{arg}`. Cells must be given as x,y pairs.");
            std::process::exit(1);
        }
    }
}

pub fn check(opts: &CheckArgs) {
    let cells: Vec<Point> = opts.cells.iter().map(|c| parse_cell(c)).collect();

    let file = match PminoFile::new_file(&opts.path) {
        Ok(f) => f,
        Err(e) => {
            println!("Failed to open catalog file {}. Error: {e}", opts.path);
            std::process::exit(1);
        }
    };

    let reference: Vec<Polyomino> = file
        .map(|s| match s {
            Ok(s) => Polyomino::from(s),
            Err(e) => {
                println!("Error: Reading the catalog failed. Error: {e}.");
                std::process::exit(1);
            }
        })
        .collect();

    if is_valid(&cells, &reference) {
        println!(
            "Valid: the drawn shape matches one of the {} catalog shapes.",
            reference.len()
        );
    } else {
        println!("Invalid: the drawn shape is disconnected or matches no catalog shape.");
        std::process::exit(1);
    }
}

fn info(path: &str) {
    let file = match PminoFile::new_file(path) {
        Ok(f) => f,
        Err(e) => {
            println!("Failed to open file. {e}");
            std::process::exit(1);
        }
    };

    let len = file
        .len()
        .map(|v| format!("{v}"))
        .unwrap_or("Unknown (is a stream)".to_string());
    let compression = file.compression();
    let canonical = if file.canonical() { "yes" } else { "no" };

    println!();
    println!("Info for {path}");
    println!("Amount of polyominoes: {len}");
    println!("Compression method: {compression:?}");
    println!("In canonical position: {canonical}");
}

fn main() {
    let opts = Opts::parse();

    match opts {
        Opts::Enumerate(e) => enumerate(&e),
        Opts::Check(c) => check(&c),
        Opts::Pmino(PminoCommands::Validate(a)) => validate(&a).unwrap(),
        Opts::Pmino(PminoCommands::Info { path }) => path.iter().map(String::as_str).for_each(info),
    }
}
