use std::time::Instant;

use openominoes::{generate, PminoFile, Polyomino, RawPolyomino, FREE_COUNTS};

use crate::{finish_bar, unknown_bar, Compression, EnumerateOpts};

/// The naive search is exponential; beyond this the run time stops being
/// interactive.
const MAX_N: usize = 12;

fn save_to_cache(compression: Compression, n: usize, shapes: &[Polyomino]) {
    let name = &format!("ominoes_{n}.pmino");
    if !std::fs::File::open(name).is_ok() {
        println!("Saving {} shapes to cache file", shapes.len());
        PminoFile::write_file(
            true,
            compression.into(),
            shapes.iter().map(RawPolyomino::from),
            name,
        )
        .unwrap();
    } else {
        println!("Cache file already exists for N = {n}. Not overwriting.");
    }
}

#[cfg(feature = "diagnostics")]
fn print_diagnostics(shapes: &[Polyomino]) {
    use std::collections::BTreeMap;

    let mut by_bounding_box: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    for shape in shapes {
        let dim = shape.bounding_box();
        *by_bounding_box.entry((dim.x, dim.y)).or_default() += 1;
    }

    for ((w, h), count) in by_bounding_box {
        println!("({w}, {h}) -> {count}");
    }
}

pub fn enumerate(opts: &EnumerateOpts) {
    let n = opts.n;

    if n > MAX_N {
        println!("n > {MAX_N} not supported for the naive search");
        return;
    }

    let sizes = if opts.all { 1..=n } else { n..=n };

    for i in sizes {
        let bar = unknown_bar();
        bar.set_message(format!("Enumerating free polyominoes of N = {i}..."));

        let start = Instant::now();
        let shapes = generate(i);

        finish_bar(&bar, start.elapsed(), shapes.len(), i);

        if let Some(expected) = (i > 0).then(|| FREE_COUNTS.get(i - 1)).flatten() {
            if *expected == shapes.len() {
                println!("Count matches the known free polyomino count ({expected}).");
            } else {
                println!(
                    "Warning: expected {expected} free polyominoes for N = {i}, found {}",
                    shapes.len()
                );
            }
        }

        #[cfg(feature = "diagnostics")]
        print_diagnostics(&shapes);

        if !opts.no_cache {
            save_to_cache(opts.cache_compression, i, &shapes);
        }
    }
}
