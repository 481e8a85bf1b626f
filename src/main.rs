mod app;
mod error;
mod graph;
mod layout;
mod palette;
mod rescale;
mod scene;
mod util;

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use eframe::egui::Color32;
use log::{info, warn};

use crate::graph::{FineToCoarse, NodeLinkGraph, WeightedGraph, parse_graph, read_mapping};
use crate::palette::{Palette, parse_color};
use crate::rescale::VisualRange;
use crate::scene::{RenderConfig, Scene};

/// Draw a network next to its coarse-grained version.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Fine graph as node-link JSON.
    fine: PathBuf,
    /// CSV table with `fine` and `coarse` columns.
    mapping: PathBuf,
    /// Coarse graph as node-link JSON.
    coarse: PathBuf,

    #[arg(long, default_value_t = 60.0)]
    min_node_size: f32,
    #[arg(long, default_value_t = 300.0)]
    max_node_size: f32,
    #[arg(long, default_value_t = 2.0)]
    min_linewidth: f32,
    #[arg(long, default_value_t = 4.0)]
    max_linewidth: f32,

    #[arg(long, default_value = ".7", value_parser = parse_color)]
    edge_color: Color32,
    #[arg(long, default_value = "w", value_parser = parse_color)]
    node_color: Color32,
    #[arg(long, default_value = "steelblue", value_parser = parse_color)]
    node_border_color: Color32,

    /// Only color coarse nodes that merged several fine nodes.
    #[arg(long)]
    selective: bool,
    #[arg(long, default_value = "Set2")]
    palette: Palette,
    /// Caption shown above both panels.
    #[arg(long)]
    title: Option<String>,

    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 50)]
    layout_iterations: usize,

    #[arg(long, default_value_t = 1000.0)]
    width: f32,
    #[arg(long, default_value_t = 450.0)]
    height: f32,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            node_size: VisualRange::new(self.min_node_size, self.max_node_size),
            linewidth: VisualRange::new(self.min_linewidth, self.max_linewidth),
            edge_color: self.edge_color,
            node_color: self.node_color,
            node_border_color: self.node_border_color,
            all_colorful: !self.selective,
            palette: self.palette,
            title: self.title.clone(),
            seed: self.seed,
            layout_iterations: self.layout_iterations,
        }
    }
}

fn load_graph(path: &Path, label: &str) -> Result<NodeLinkGraph> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {label} graph {}", path.display()))?;
    let graph = parse_graph(&raw)
        .with_context(|| format!("failed to parse {label} graph {}", path.display()))?;
    info!(
        "loaded {label} graph {}: {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn load_mapping(path: &Path) -> Result<FineToCoarse> {
    let file =
        File::open(path).with_context(|| format!("failed to open mapping {}", path.display()))?;
    let mapping =
        read_mapping(file).with_context(|| format!("failed to parse mapping {}", path.display()))?;

    if mapping.is_empty() {
        warn!("mapping {} has no rows", path.display());
    }
    info!("loaded {} mapping rows from {}", mapping.len(), path.display());
    Ok(mapping)
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let config = args.render_config();
    config.validate().context("invalid drawing options")?;

    let fine = load_graph(&args.fine, "fine")?;
    let coarse = load_graph(&args.coarse, "coarse")?;
    let mapping = load_mapping(&args.mapping)?;

    let scene = Scene::build(&fine, &mapping, &coarse, &config)
        .context("cannot draw these graphs together")?;

    app::show(scene, [args.width, args.height])
        .map_err(|error| anyhow!("viewer window failed: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_defaults_match_render_config_defaults() {
        let config = Args::parse_from(["coarse-view", "f", "m", "c"]).render_config();
        let defaults = RenderConfig::default();

        assert_eq!(config.node_size, defaults.node_size);
        assert_eq!(config.linewidth, defaults.linewidth);
        assert_eq!(config.edge_color, defaults.edge_color);
        assert_eq!(config.node_color, defaults.node_color);
        assert_eq!(config.node_border_color, defaults.node_border_color);
        assert_eq!(config.all_colorful, defaults.all_colorful);
        assert_eq!(config.palette, defaults.palette);
        assert_eq!(config.title, defaults.title);
        assert_eq!(config.seed, defaults.seed);
        assert_eq!(config.layout_iterations, defaults.layout_iterations);
    }

    #[test]
    fn selective_flag_and_nan_sizes_reach_the_config() {
        let args = Args::parse_from([
            "coarse-view",
            "f",
            "m",
            "c",
            "--selective",
            "--palette",
            "dark2",
            "--min-node-size",
            "nan",
        ]);
        let config = args.render_config();

        assert!(!config.all_colorful);
        assert_eq!(config.palette, Palette::Dark2);
        assert!(config.validate().is_err());
    }
}
