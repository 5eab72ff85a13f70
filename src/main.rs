use clap::{Parser, Subcommand};
use colored::Colorize;
use imgopt::imaging::{BackendError, ImageBackend, Quality, RustBackend};
use imgopt::process::{self, OptimizeOptions};
use imgopt::{bulk, output};
use std::path::PathBuf;

/// Shared flags for commands that write an output file.
#[derive(clap::Args, Clone)]
struct OutputArgs {
    /// Output file name, with extension (png, jpg, etc...)
    #[arg(long, short = 'n')]
    name: Option<String>,

    /// Directory to save the output to (created if missing)
    #[arg(long, short = 'd')]
    dir: Option<PathBuf>,
}

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup — trivial, called exactly once
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "imgopt")]
#[command(about = "Inspect, resize, and optimize images from the command line")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show information about an image
    Info {
        /// Path to image
        path: PathBuf,
    },
    /// Resize an image to exact dimensions, keeping its format
    ResizeImage {
        /// Path to image
        path: PathBuf,
        /// Target width in pixels
        width: u32,
        /// Target height in pixels
        height: u32,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Re-encode an image as JPEG, optionally resizing it first
    OptimizeImage {
        /// Path to image
        path: PathBuf,
        /// Target width (defaults to the image's width)
        #[arg(long)]
        width: Option<u32>,
        /// Target height (defaults to the image's height)
        #[arg(long)]
        height: Option<u32>,
        #[command(flatten)]
        output: OutputArgs,
        /// JPEG quality (1-100)
        #[arg(long, default_value_t = 50)]
        quality: u32,
    },
    /// Optimize every image in a directory, in parallel
    OptimizeBulk {
        /// Directory with images (jpg, jpeg, png, webp)
        input_dir: PathBuf,
        /// Target width for all images
        #[arg(long)]
        width: Option<u32>,
        /// Target height for all images
        #[arg(long)]
        height: Option<u32>,
        /// JPEG quality (1-100)
        #[arg(long, short = 'q', default_value_t = 85)]
        quality: u32,
        /// Directory where optimized images will be saved
        #[arg(long, short = 'f')]
        folder: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BackendError> {
    let backend = RustBackend::new();

    match cli.command {
        Command::Info { path } => {
            let info = backend.identify(&path)?;
            output::print_info(&info);
        }
        Command::ResizeImage {
            path,
            width,
            height,
            output: out,
        } => {
            let written = process::resize_file(
                &backend,
                &path,
                out.name.as_deref(),
                out.dir.as_deref(),
                width,
                height,
            )?;
            output::print_resized(&written);
        }
        Command::OptimizeImage {
            path,
            width,
            height,
            output: out,
            quality,
        } => {
            let options = OptimizeOptions {
                width,
                height,
                quality: Quality::new(quality),
                output_dir: out.dir,
            };
            let report = process::optimize_file(&backend, &path, out.name.as_deref(), &options)?;
            output::print_optimized(&report);
        }
        Command::OptimizeBulk {
            input_dir,
            width,
            height,
            quality,
            folder,
        } => {
            let files = bulk::find_images(&input_dir)?;
            if files.is_empty() {
                output::print_no_files_warning();
                return Ok(());
            }
            output::print_found_files(files.len());

            init_thread_pool();
            let options = OptimizeOptions {
                width,
                height,
                quality: Quality::new(quality),
                output_dir: folder,
            };
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    output::print_bulk_event(&event);
                }
            });
            bulk::dispatch(&backend, &files, &options, Some(tx));
            printer.join().ok();
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool bound to host parallelism.
fn init_thread_pool() {
    let threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
