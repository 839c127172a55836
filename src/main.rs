use std::path::PathBuf;

use clap::Parser;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use planet_chunks::ascii::{render_ascii, AsciiMode};
use planet_chunks::export::{export_biome_png, export_height_png, PreviewRegion};
use planet_chunks::params::{self, WorldParams, DEFAULT_PRESETS_PATH};
use planet_chunks::{ChunkedWorld, WorldGenerator};

#[derive(Parser, Debug)]
#[command(name = "planet_chunks")]
#[command(about = "Generate chunked procedural planets and preview them")]
struct Args {
    /// Preset name from the presets file (defaults are used when omitted)
    #[arg(short, long)]
    preset: Option<String>,

    /// JSON file holding the presets
    #[arg(long, default_value = DEFAULT_PRESETS_PATH)]
    presets_file: PathBuf,

    /// Random seed (preset seed, or a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Planet circumference in km
    #[arg(long)]
    size_km: Option<u32>,

    /// Ocean coverage, 0-100
    #[arg(long)]
    ocean: Option<u8>,

    /// Number of vertical levels
    #[arg(long, default_value = "6")]
    tiles_levels: u8,

    /// Chunk edge length in tiles
    #[arg(long, default_value = "64")]
    chunk_size: usize,

    /// Maximum number of chunks kept in memory
    #[arg(long, default_value = "256")]
    cache_chunks: usize,

    /// Chunk radius preloaded around the spawn before it is refined (0 skips both)
    #[arg(long, default_value = "1")]
    prewarm_radius: usize,

    /// Export biome and height previews (PNG path, e.g. "planet.png")
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Preview width in pixels for the whole planet
    #[arg(long, default_value = "768")]
    preview_size: u32,

    /// Print an ASCII map around the spawn (biome, height, level, temperature, moisture)
    #[arg(long, num_args = 0..=1, default_missing_value = "biome")]
    ascii: Option<String>,

    /// Load the world from a snapshot instead of generating it
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save a snapshot of the world (JSON)
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// List presets and exit
    #[arg(long)]
    list_presets: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn load_params(args: &Args) -> WorldParams {
    let mut overrides = Map::new();
    if let Some(km) = args.size_km {
        overrides.insert("size".to_string(), Value::from(km));
    }
    if let Some(ocean) = args.ocean {
        overrides.insert("ocean_pct".to_string(), Value::from(ocean.min(100)));
    }

    let Some(name) = args.preset.as_deref() else {
        return WorldParams::from_json_value(Value::Object(overrides)).unwrap_or_default();
    };

    match params::load_world_params_from_preset(name, &args.presets_file, Some(&overrides)) {
        Ok(params) => params,
        Err(e) => {
            log::warn!("Could not load preset '{}': {}. Using defaults.", name, e);
            WorldParams::from_json_value(Value::Object(overrides)).unwrap_or_default()
        }
    }
}

fn main() {
    init_logging();
    let args = Args::parse();

    if args.list_presets {
        match params::list_presets(&args.presets_file) {
            Ok(names) => {
                for name in names {
                    println!("{}", name);
                }
            }
            Err(e) => eprintln!("Failed to read presets: {}", e),
        }
        return;
    }

    let mut last_label = String::new();
    let mut progress = |fraction: f32, label: &str| {
        if label != last_label {
            println!("[{:>3.0}%] {}", fraction * 100.0, label);
            last_label = label.to_string();
        }
    };

    let mut world = if let Some(path) = &args.load {
        println!("Loading snapshot {}...", path.display());
        match ChunkedWorld::load_snapshot(path, args.cache_chunks, Some(&mut progress)) {
            Ok(world) => world,
            Err(e) => {
                eprintln!("Failed to load snapshot: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        let params = load_params(&args);
        let generator = WorldGenerator::new(args.tiles_levels, args.chunk_size, args.cache_chunks);
        let scale = generator.planet_scale(&params);
        println!("Generating planet '{}'", params.world_name);
        println!(
            "Scale: {} ({}, {:.1} km/tile)",
            scale.name(),
            scale.format_map_size(),
            scale.km_per_tile
        );
        generator.generate_planet(&params, args.seed, Some(&mut progress))
    };

    if args.prewarm_radius > 0 {
        let generated = world.prepare_spawn_area(args.prewarm_radius, Some(&mut progress));
        println!("Preloaded {} chunks around the spawn", generated);
    }

    println!("Final seed: {}", world.seed());
    println!("Map size: {}x{} tiles", world.width(), world.height());
    println!("Sea level: {:.3}", world.sea_level());

    let (sx, sy) = world.spawn();
    println!(
        "Spawn: ({}, {}) biome={} height={:.3} level={}",
        sx,
        sy,
        world.get_biome(sx as i64, sy as i64),
        world.get_height01(sx as i64, sy as i64),
        world.get_level(sx as i64, sy as i64)
    );

    if let Some(mode_name) = &args.ascii {
        let mode = AsciiMode::from_name(mode_name).unwrap_or_else(|| {
            log::warn!("Unknown ASCII mode '{}', using biome", mode_name);
            AsciiMode::Biome
        });
        println!("\n{} map around spawn:", mode.name());
        print!("{}", render_ascii(&mut world, sx as i64 - 40, sy as i64 - 12, 80, 25, 1, mode));
    }

    if let Some(path) = &args.preview {
        let region = PreviewRegion::whole_world(&world, args.preview_size);
        println!("Exporting biome preview to {}...", path.display());
        if let Err(e) = export_biome_png(&mut world, region, path) {
            eprintln!("Failed to export biome preview: {}", e);
        }

        let height_path = path.with_file_name(format!(
            "{}_height.png",
            path.file_stem().and_then(|s| s.to_str()).unwrap_or("preview")
        ));
        println!("Exporting height preview to {}...", height_path.display());
        if let Err(e) = export_height_png(&mut world, region, &height_path) {
            eprintln!("Failed to export height preview: {}", e);
        }
    }

    if let Some(path) = &args.snapshot {
        match world.save_snapshot(path) {
            Ok(()) => println!("Snapshot saved to {}", path.display()),
            Err(e) => eprintln!("Failed to save snapshot: {}", e),
        }
    }

    println!("Cache: {}", world.cache_stats().summary());
}
