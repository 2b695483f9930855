//! `relief` — turn a grayscale depth image into a millable STL relief.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use height_sampler::decode_raster;
use relief_bridge::{export_depth_map, export_relief, export_relief_ascii, load_request, ExportRequest};
use relief_mesh::read_binary_stl;
use relief_types::{ChannelMode, GridSize};
use tracing::info;

#[derive(Parser)]
#[command(name = "relief")]
#[command(about = "Convert depth-map images into STL relief meshes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample an image and write a relief STL
    Export {
        /// Source image (PNG, JPEG, GIF, WebP, BMP)
        image: PathBuf,
        /// Output STL path
        #[arg(short, long)]
        output: PathBuf,
        #[command(flatten)]
        params: ParamArgs,
        /// Maximum carve depth for a white pixel
        #[arg(long)]
        depth: Option<f32>,
        /// Spacing between grid samples
        #[arg(long)]
        grid: Option<f32>,
        /// Header comment (truncated to 80 bytes)
        #[arg(long)]
        header: Option<String>,
        /// Write ASCII STL instead of binary
        #[arg(long)]
        ascii: bool,
    },
    /// Sample an image and write the heightmap as a grayscale PNG
    DepthMap {
        image: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[command(flatten)]
        params: ParamArgs,
    },
    /// Print the header and triangle count of a binary STL
    Inspect { stl: PathBuf },
}

#[derive(Args)]
struct ParamArgs {
    /// JSON export request; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,
    /// Heightmap width in samples
    #[arg(long)]
    width: Option<usize>,
    /// Heightmap height in samples
    #[arg(long)]
    height: Option<usize>,
    /// Use the red channel only instead of averaging RGB
    #[arg(long)]
    red_only: bool,
}

impl ParamArgs {
    fn request(&self) -> Result<ExportRequest> {
        let mut request = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                load_request(&json).with_context(|| format!("parsing config {}", path.display()))?
            }
            None => ExportRequest::default(),
        };
        request.grid = GridSize::new(
            self.width.unwrap_or(request.grid.width),
            self.height.unwrap_or(request.grid.height),
        );
        if self.red_only {
            request.channel_mode = ChannelMode::RedOnly;
        }
        Ok(request)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Export {
            image,
            output,
            params,
            depth,
            grid,
            header,
            ascii,
        } => {
            let mut request = params.request()?;
            if let Some(depth) = depth {
                request.depth_scale = depth;
            }
            if let Some(grid) = grid {
                request.grid_scale = grid;
            }
            if header.is_some() {
                request.header = header;
            }

            let raster = read_image(&image)?;
            if ascii {
                let text = export_relief_ascii(raster.view(), &request).context("exporting relief")?;
                write_output(&output, text.as_bytes())?;
            } else {
                let stl = export_relief(raster.view(), &request).context("exporting relief")?;
                write_output(&output, &stl)?;
            }
        }
        Commands::DepthMap {
            image,
            output,
            params,
        } => {
            let request = params.request()?;
            let raster = read_image(&image)?;
            let png = export_depth_map(raster.view(), &request).context("exporting depth map")?;
            write_output(&output, &png)?;
        }
        Commands::Inspect { stl } => {
            let bytes = fs::read(&stl).with_context(|| format!("reading {}", stl.display()))?;
            let doc = read_binary_stl(&bytes).with_context(|| format!("parsing {}", stl.display()))?;
            println!("header:    {}", doc.header_text());
            println!("triangles: {}", doc.triangle_count());
            println!("bytes:     {}", bytes.len());
        }
    }
    Ok(())
}

fn read_image(path: &Path) -> Result<relief_types::RasterImage> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raster = decode_raster(&bytes).with_context(|| format!("decoding {}", path.display()))?;
    info!(path = %path.display(), width = raster.width, height = raster.height, "loaded source image");
    Ok(raster)
}

/// Write the finished buffer in one call; nothing is written on earlier failure.
fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
