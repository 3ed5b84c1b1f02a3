use clap::{Parser, Subcommand};
use log::debug;
use voxel_math::io::read_vectors_csv;
use voxel_math::vector::{path_length, Vector3};

#[derive(Parser)]
#[command(name = "voxel_math_cli", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the distance between two world-space points.
    Distance {
        x1: f64,
        y1: f64,
        z1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
    },
    /// Compute the length of a vector.
    Length { x: f64, y: f64, z: f64 },
    /// Compute the dot product of two vectors.
    Dot {
        x1: f64,
        y1: f64,
        z1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
    },
    /// Scale a vector to unit length.
    Unit { x: f64, y: f64, z: f64 },
    /// Compute the angle in radians between two directions.
    Angle {
        x1: f64,
        y1: f64,
        z1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
    },
    /// Find the block containing a world-space position.
    Floor { x: f64, y: f64, z: f64 },
    /// Sum the segment lengths along a path of x,y,z rows in a CSV file.
    PathLength { path: String },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Distance {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
        } => {
            let a = Vector3::new(x1, y1, z1);
            let b = Vector3::new(x2, y2, z2);
            println!("Distance is {:.3}", a.distance_to(b));
        }
        Commands::Length { x, y, z } => {
            println!("Length is {:.3}", Vector3::new(x, y, z).length());
        }
        Commands::Dot {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
        } => {
            let a = Vector3::new(x1, y1, z1);
            let b = Vector3::new(x2, y2, z2);
            println!("Dot product is {:.3}", a.dot(b));
        }
        Commands::Unit { x, y, z } => {
            let v = Vector3::new(x, y, z);
            if v == Vector3::ZERO {
                eprintln!("Cannot normalize the zero vector");
            } else {
                let u = v.normalized();
                println!("{:.6},{:.6},{:.6}", u.x, u.y, u.z);
            }
        }
        Commands::Angle {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
        } => {
            let a = Vector3::new(x1, y1, z1);
            let b = Vector3::new(x2, y2, z2);
            if a == Vector3::ZERO || b == Vector3::ZERO {
                eprintln!("Cannot measure an angle against the zero vector");
            } else {
                let angle = a.normalized().angle_between(b.normalized());
                println!("Angle is {:.3} rad", angle);
            }
        }
        Commands::Floor { x, y, z } => {
            let p = Vector3::new(x, y, z).floor();
            println!("Block {},{},{}", p.x, p.y, p.z);
        }
        Commands::PathLength { path } => match read_vectors_csv(&path) {
            Ok(pts) => {
                debug!("read {} points from {}", pts.len(), path);
                println!("Path length: {:.3}", path_length(&pts));
            }
            Err(e) => eprintln!("Error reading {}: {}", path, e),
        },
    }
}
