//! Command-line front end: pick a scene, render it, stream PPM out.

mod scenes;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ember_math::Vec3;
use ember_renderer::{write_ppm, BvhNode, Camera, Hittable, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScenePick {
    /// Spheres, a wall rectangle, and an overhead light
    RectLight,
    /// The empty Cornell cell
    Cornell,
    /// Cornell cell with a red box
    CornellCubes,
    /// A box rotated around two axes over a marble ground
    RotatedBox,
    /// Image-textured globe over a checkered ground
    Earth,
}

#[derive(Parser, Debug)]
#[command(about = "Offline Monte Carlo path tracer")]
struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value_t = ScenePick::CornellCubes)]
    scene: ScenePick,

    /// Image width in pixels (height follows the scene's aspect ratio)
    #[arg(short = 'w', long, default_value_t = 600)]
    width: u32,

    /// Samples per pixel; defaults to the scene's own setting
    #[arg(short = 's', long)]
    samples: Option<u32>,

    /// Maximum ray bounce depth
    #[arg(short = 'd', long, default_value_t = 50)]
    depth: u32,

    /// Output file; stdout when omitted
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Intersect via linear list scan instead of the BVH
    #[arg(long)]
    no_bvh: bool,

    /// RNG seed for reproducible renders
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);

    let scene = match args.scene {
        ScenePick::RectLight => scenes::rect_light(&mut rng),
        ScenePick::Cornell => scenes::cornell_box(),
        ScenePick::CornellCubes => scenes::cornell_box_cubes(),
        ScenePick::RotatedBox => scenes::rotated_box(&mut rng),
        ScenePick::Earth => scenes::earth(),
    };

    let width = args.width;
    let height = ((width as f32 / scene.aspect_ratio) as u32).max(1);

    let camera = Camera::new(
        scene.look_from,
        scene.look_at,
        Vec3::Y,
        scene.vfov,
        scene.aspect_ratio,
        0.0,
        10.0,
    )
    .with_shutter(0.0, 1.0);

    let config = RenderConfig {
        samples_per_pixel: args.samples.unwrap_or(scene.samples_per_pixel),
        max_depth: args.depth,
        background: scene.background,
    };

    let world: Box<dyn Hittable> = if args.no_bvh {
        Box::new(scene.world)
    } else {
        Box::new(BvhNode::from_list(scene.world, 0.0, 1.0, &mut rng))
    };

    log::info!(
        "rendering {:?} at {}x{}, {} spp, depth {}",
        args.scene,
        width,
        height,
        config.samples_per_pixel,
        config.max_depth
    );

    let image = ember_renderer::render(&camera, world.as_ref(), &config, width, height, &mut rng);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_ppm(&mut out, &image).context("writing PPM stream")?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_ppm(&mut out, &image).context("writing PPM stream")?;
            out.flush()?;
        }
    }

    Ok(())
}
