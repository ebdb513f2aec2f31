use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use snakeview_common::Layer;
use snakeview_input::{Binding, Key, KeyBindings};
use snakeview_render::{DebugTextRenderer, RenderView, Renderer};
use snakeview_scene::{Layers, Scene};
use snakeview_snapshot::{FrameStore, plan_renumber, renumber};
use snakeview_tools::{SceneInspector, audit_frames};
use snakeview_viewer::ViewerConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snakeview-cli", about = "Tools for snakeview snapshot directories")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, crate info, defaults and key bindings
    Info,
    /// Copy *.json files into a 0..N-1 sequence ordered by numeric name
    Renumber {
        #[arg(long, default_value = "data_time")]
        source: PathBuf,
        #[arg(long, default_value = "data_sequence")]
        target: PathBuf,
        /// Print the copies without performing them
        #[arg(long)]
        dry_run: bool,
    },
    /// Parse every frame and report malformed or missing ones
    Validate {
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
    /// Print the blocks of one frame
    Show {
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        #[arg(short, long, default_value = "0")]
        frame: usize,
        #[arg(long)]
        hide_fences: bool,
        #[arg(long)]
        hide_food: bool,
        #[arg(long)]
        hide_snakes: bool,
        #[arg(long)]
        hide_enemies: bool,
    },
}

const KEY_NAMES: [(Key, &str); 18] = [
    (Key::W, "W"),
    (Key::S, "S"),
    (Key::A, "A"),
    (Key::D, "D"),
    (Key::Space, "Space"),
    (Key::LShift, "LShift"),
    (Key::Plus, "+"),
    (Key::Minus, "-"),
    (Key::Escape, "Esc"),
    (Key::F1, "F1"),
    (Key::Digit1, "1"),
    (Key::Digit2, "2"),
    (Key::Digit3, "3"),
    (Key::Digit4, "4"),
    (Key::Digit5, "5"),
    (Key::Digit6, "6"),
    (Key::Digit7, "7"),
    (Key::Digit8, "8"),
];

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("snakeview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("snapshot: {}", snakeview_snapshot::crate_info());
            println!("render: {}", snakeview_render::crate_info());
            println!("tools: {}", snakeview_tools::crate_info());

            let config = ViewerConfig::default();
            println!(
                "defaults: data_dir={} speed={} fov={} reach remove={} place={}",
                config.data_dir.display(),
                config.move_speed,
                config.fov_degrees,
                config.remove_reach,
                config.place_reach
            );

            let bindings = KeyBindings::default();
            println!("bindings:");
            for (key, name) in KEY_NAMES {
                match bindings.binding(key) {
                    Some(Binding::Move(m)) => println!("  {name:<6} move {m:?}"),
                    Some(Binding::Trigger(a)) => println!("  {name:<6} {a:?}"),
                    None => {}
                }
            }
        }
        Commands::Renumber {
            source,
            target,
            dry_run,
        } => {
            if dry_run {
                let plan = plan_renumber(&source, &target)?;
                for file in &plan {
                    println!("{} -> {}", file.source.display(), file.target.display());
                }
                println!("{} files would be copied", plan.len());
            } else {
                let copied = renumber(&source, &target)?;
                println!(
                    "copied {} files from {} to {}",
                    copied.len(),
                    source.display(),
                    target.display()
                );
            }
        }
        Commands::Validate { data_dir } => {
            let store = FrameStore::open(&data_dir);
            let audit = audit_frames(&store)?;
            println!("{}: {audit}", data_dir.display());
            for problem in &audit.problems {
                println!("  frame {}: {}", problem.index, problem.message);
            }
            if !audit.gaps.is_empty() {
                println!("  missing: {:?}", audit.gaps);
            }
            if !audit.is_clean() {
                bail!("{} is not a clean frame sequence", data_dir.display());
            }
        }
        Commands::Show {
            data_dir,
            frame,
            hide_fences,
            hide_food,
            hide_snakes,
            hide_enemies,
        } => {
            let store = FrameStore::open(&data_dir);
            let snapshot = store
                .load(frame)?
                .with_context(|| format!("frame {frame} not found in {}", data_dir.display()))?;

            let mut layers = Layers::default();
            for (layer, hidden) in [
                (Layer::Fences, hide_fences),
                (Layer::Food, hide_food),
                (Layer::Snakes, hide_snakes),
                (Layer::Enemies, hide_enemies),
            ] {
                layers.set_visible(layer, !hidden);
            }

            let mut scene = Scene::new();
            scene.regenerate(&snapshot, &layers);
            println!("frame {frame}: {}", SceneInspector::summary(&scene));
            print!(
                "{}",
                DebugTextRenderer::new().render(&scene, &RenderView::default())
            );
        }
    }

    Ok(())
}
