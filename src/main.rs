//main.rs
use anyhow::Context;
use clap::Parser;
use kmeans2d::kmeans::validate_cluster_count;
use kmeans2d::prompt::{parse_centroid_list, read_centroids, read_cluster_count, wants_initial_centroids};
use kmeans2d::{write_output, DataSet, KMeansConfig, OutputFormat};
use log::info;
use std::io;

#[derive(Parser)]
#[clap(version, about = "Lloyd's k-means clustering of 2D points")]
struct Opts {
    /// Input file, one `x y` pair per line
    #[clap(short, long, default_value = "kmeans-data.txt")]
    file: String,

    /// Number of clusters; asked for on stdin when missing
    #[clap(short, long)]
    k: Option<usize>,

    /// Output file, one `x y cluster` record per point
    #[clap(short, long, default_value = "kmeans-output.txt")]
    outfile: String,

    /// Initial centroids as `x,y;x,y;...`
    #[clap(short, long)]
    centroids: Option<String>,

    /// Ask on stdin whether to type in the initial centroids
    #[clap(long)]
    prompt_centroids: bool,

    /// Iteration cap
    #[clap(long, default_value_t = kmeans2d::config::DEFAULT_MAX_ITER)]
    max_iter: usize,

    /// Convergence threshold on centroid movement
    #[clap(long, default_value_t = kmeans2d::config::DEFAULT_TOL)]
    tol: f64,

    /// Read the input as delimited records split on this character (e.g. ',' or '\t')
    #[clap(long)]
    delimiter: Option<char>,

    /// Write tab separated output with a header line
    #[clap(long)]
    tsv: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    let ds = match opts.delimiter {
        Some(d) => {
            let d = u8::try_from(d).context("delimiter must be a single byte character")?;
            DataSet::from_delimited(&opts.file, d)?
        }
        None => DataSet::from_txt(&opts.file)?,
    };
    println!("Loaded {} points from {}", ds.len(), opts.file);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let k = match opts.k {
        Some(k) => {
            validate_cluster_count(k, ds.len())?;
            k
        }
        None => read_cluster_count(&mut input, &mut output, ds.len())?,
    };

    let initial = match &opts.centroids {
        Some(list) => Some(parse_centroid_list(list)?),
        None if opts.prompt_centroids || opts.k.is_none() => {
            if wants_initial_centroids(&mut input, &mut output)? {
                Some(read_centroids(&mut input, &mut output, k)?)
            } else {
                None
            }
        }
        None => None,
    };
    if let Some(c) = &initial {
        for (i, p) in c.iter().enumerate() {
            println!("  Initial centroid {}: {}", i + 1, p);
        }
    }

    let config = KMeansConfig::new()
        .with_max_iter(opts.max_iter)
        .with_tol(opts.tol);
    let result = ds.kmeans(k, initial, &config)?;
    info!(
        "{} after {} iterations, inertia = {:.6}",
        if result.converged { "Converged" } else { "Stopped" },
        result.n_iterations,
        result.inertia(&ds)
    );

    let format = if opts.tsv { OutputFormat::Tsv } else { OutputFormat::Plain };
    write_output(&opts.outfile, &ds, &result.assignments, format)?;
    println!("Output written to {}", opts.outfile);

    let sizes = result.cluster_sizes();
    for (i, c) in result.centroids.iter().enumerate() {
        println!("  Centroid {}: {} ({} points)", i + 1, c, sizes[i]);
    }

    Ok(())
}
