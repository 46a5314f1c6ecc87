use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use argh::FromArgs;
use meshlib::{
    format::Vec3,
    loader::LoaderRegistry,
    model::{Mesh, Model},
    util::file::open_stream,
};

#[derive(FromArgs, PartialEq, Debug)]
/// process 3DS model files
#[argh(subcommand, name = "3ds")]
pub struct Args {
    #[argh(subcommand)]
    command: SubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum SubCommand {
    Info(InfoArgs),
    Convert(ConvertArgs),
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
/// prints mesh information for a 3DS file
#[argh(subcommand, name = "info")]
pub struct InfoArgs {
    #[argh(positional)]
    /// input file
    input: PathBuf,
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
/// converts a 3DS file to Wavefront OBJ
#[argh(subcommand, name = "convert")]
pub struct ConvertArgs {
    #[argh(positional)]
    /// input file
    input: PathBuf,
    #[argh(positional)]
    /// output OBJ
    output: PathBuf,
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        SubCommand::Info(c_args) => info(c_args),
        SubCommand::Convert(c_args) => convert(c_args),
    }
}

fn load(path: &Path) -> Result<(Model, Mesh)> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_else(|| "3ds".to_string());
    let mut stream = open_stream(path)?;
    let mut model = Model::new();
    let mesh = LoaderRegistry::new().load(&mut model, &extension, &mut stream)?;
    Ok((model, mesh))
}

fn info(args: InfoArgs) -> Result<()> {
    let (model, mesh) = load(&args.input)?;
    let vertices =
        &model.vertices.as_slice()[mesh.vertex_start..mesh.vertex_start + mesh.vertex_count];

    let mut min = vertices.first().map(|v| v.pos).unwrap_or(Vec3::ZERO);
    let mut max = min;
    for v in vertices {
        min = Vec3 { x: min.x.min(v.pos.x), y: min.y.min(v.pos.y), z: min.z.min(v.pos.z) };
        max = Vec3 { x: max.x.max(v.pos.x), y: max.y.max(v.pos.y), z: max.z.max(v.pos.z) };
    }

    println!("{}:", args.input.display());
    println!("  vertices: {}", mesh.vertex_count);
    println!("  triangles: {}", mesh.index_count / 3);
    println!("  bounds min: ({}, {}, {})", min.x, min.y, min.z);
    println!("  bounds max: ({}, {}, {})", max.x, max.y, max.z);
    Ok(())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let (model, mesh) = load(&args.input)?;
    let vertices =
        &model.vertices.as_slice()[mesh.vertex_start..mesh.vertex_start + mesh.vertex_count];
    let indices = &model.indices.as_slice()[mesh.index_start..mesh.index_start + mesh.index_count];

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create file '{}'", args.output.display()))?;
    let mut w = BufWriter::new(file);
    for v in vertices {
        writeln!(w, "v {} {} {}", v.pos.x, v.pos.y, v.pos.z)?;
    }
    for v in vertices {
        writeln!(w, "vt {} {}", v.uv.x, v.uv.y)?;
    }
    for v in vertices {
        writeln!(w, "vn {} {} {}", v.nor.x, v.nor.y, v.nor.z)?;
    }
    for tri in indices.chunks_exact(3) {
        // OBJ indices are 1-based and scoped to the vertices written above
        let (a, b, c) = (
            tri[0] as usize - mesh.vertex_start + 1,
            tri[1] as usize - mesh.vertex_start + 1,
            tri[2] as usize - mesh.vertex_start + 1,
        );
        writeln!(w, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    w.flush()?;

    log::info!(
        "Wrote {} ({} vertices, {} triangles)",
        args.output.display(),
        mesh.vertex_count,
        mesh.index_count / 3
    );
    Ok(())
}
