//! Heightmap Mesher CLI
//!
//! Convert a grayscale image into a colored 3D heightfield mesh.

use clap::{Parser, ValueEnum};
use heightmap_mesher::{
    load_image, write_glb, write_obj, Mesher, MesherConfig, MesherOutput, Result,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "heightmap-mesher")]
#[command(author, version, about = "Convert a grayscale image into a heightfield mesh", long_about = None)]
struct Cli {
    /// Path to the input image (jpg/png)
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the output asset
    #[arg(short, long, default_value = "outputs/model.glb")]
    output: PathBuf,

    /// Target mesh width in vertices
    #[arg(long, default_value_t = 256)]
    width: u32,

    /// Target mesh height in vertices
    #[arg(long, default_value_t = 256)]
    height: u32,

    /// Vertical exaggeration
    #[arg(long, default_value_t = 0.12)]
    z_scale: f32,

    /// Invert the height mapping
    #[arg(long)]
    invert: bool,

    /// Smoothing kernel size (forced odd, 0 = off)
    #[arg(long, default_value_t = 3)]
    blur: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "glb")]
    format: OutputFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Binary glTF format
    Glb,
    /// Wavefront OBJ format
    Obj,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    println!("Loading image from {:?}...", cli.input);
    let source = load_image(&cli.input)?;
    println!("  Decoded {}x{} pixels", source.width, source.height);

    let config = MesherConfig {
        width: cli.width,
        height: cli.height,
        z_scale: cli.z_scale,
        invert: cli.invert,
        blur: cli.blur,
    };

    println!("Meshing with config:");
    println!("  - Resolution: {}x{}", config.width, config.height);
    println!("  - Z scale: {}", config.z_scale);
    println!("  - Invert: {}", config.invert);
    println!("  - Blur kernel: {}", config.blur);

    let mesher = Mesher::with_config(config);
    let output = mesher.mesh(&source)?;

    println!(
        "  Generated {} vertices, {} triangles",
        output.vertex_count(),
        output.triangle_count()
    );

    export_output(&output, &cli.output, cli.format)?;

    Ok(())
}

fn export_output(output: &MesherOutput, path: &PathBuf, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Glb => {
            let glb_path = if path.extension().is_some() {
                path.clone()
            } else {
                path.with_extension("glb")
            };
            write_glb(output, &glb_path)?;
            println!("Exported GLB to {:?}", glb_path);
        }
        OutputFormat::Obj => {
            let obj_path = if path.extension().is_some() {
                path.clone()
            } else {
                path.with_extension("obj")
            };
            write_obj(output, &obj_path)?;
            println!("Exported OBJ to {:?}", obj_path);
        }
    }

    Ok(())
}
