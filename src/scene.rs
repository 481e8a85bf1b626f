use std::collections::HashMap;

use eframe::egui::{Color32, Vec2};
use log::{debug, info};

use crate::error::{MappingIssue, Result, VizError};
use crate::graph::{CoarseGroups, FineToCoarse, NodeLinkGraph, WeightedGraph};
use crate::layout::{Positions, centroid_positions, spring_layout};
use crate::palette::Palette;
use crate::rescale::VisualRange;

pub const FINE_PANEL_TITLE: &str = "Original network";
pub const COARSE_PANEL_TITLE: &str = "Coarse-grained network";

/// Validated drawing options.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Marker area range in pt², used by the coarse panel.
    pub node_size: VisualRange,
    /// Line width range in pt, used by both panels.
    pub linewidth: VisualRange,
    pub edge_color: Color32,
    pub node_color: Color32,
    pub node_border_color: Color32,
    /// Color every coarse node, or only those that merged several fine nodes.
    pub all_colorful: bool,
    pub palette: Palette,
    pub title: Option<String>,
    pub seed: u64,
    pub layout_iterations: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            node_size: VisualRange::new(60.0, 300.0),
            linewidth: VisualRange::new(2.0, 4.0),
            // `.7` gray, as parsed from the command line.
            edge_color: Color32::from_gray(179),
            node_color: Color32::WHITE,
            node_border_color: Color32::from_rgb(70, 130, 180),
            all_colorful: true,
            palette: Palette::Set2,
            title: None,
            seed: 0,
            layout_iterations: 50,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        check_range("node size", self.node_size)?;
        check_range("linewidth", self.linewidth)
    }
}

fn check_range(what: &'static str, range: VisualRange) -> Result<()> {
    if !range.min.is_finite()
        || !range.max.is_finite()
        || range.min > range.max
        || range.min < 0.0
    {
        return Err(VizError::InvalidRange {
            what,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub id: String,
    pub position: Vec2,
    /// Marker area in pt².
    pub size: f32,
    pub fill: Color32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneEdge {
    pub from: Vec2,
    pub to: Vec2,
    /// Line width in pt.
    pub width: f32,
}

#[derive(Clone, Debug)]
pub struct PanelScene {
    pub title: &'static str,
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
}

/// Everything needed to paint the two panels.
#[derive(Clone, Debug)]
pub struct Scene {
    pub title: Option<String>,
    pub fine: PanelScene,
    pub coarse: PanelScene,
    pub edge_color: Color32,
    pub node_border_color: Color32,
}

impl Scene {
    pub fn build(
        fine: &NodeLinkGraph,
        mapping: &FineToCoarse,
        coarse: &NodeLinkGraph,
        config: &RenderConfig,
    ) -> Result<Self> {
        config.validate()?;
        mapping.validate(fine, coarse)?;

        let groups = mapping.invert();
        if groups.is_empty() {
            debug!("no coarse nodes to draw");
        }
        info!(
            "{} fine nodes grouped into {} coarse nodes ({} merged)",
            fine.node_count(),
            groups.len(),
            groups.merged_count()
        );

        let fine_positions = spring_layout(fine, config.seed, config.layout_iterations);
        let coarse_positions = centroid_positions(&groups, &fine_positions)?;
        info!("layout computed for {} fine nodes", fine_positions.len());

        let coarse_colors = assign_coarse_colors(
            &groups,
            config.palette,
            config.all_colorful,
            config.node_color,
        );

        let mut fine_nodes = Vec::with_capacity(fine.node_count());
        for id in fine.nodes() {
            let coarse_id = mapping.coarse_of(id).ok_or_else(|| {
                VizError::mapping(MappingIssue::FineNodeUnmapped(id.to_owned()))
            })?;
            fine_nodes.push(SceneNode {
                id: id.to_owned(),
                position: position_of(&fine_positions, id, MappingIssue::FineNodeNotInGraph)?,
                size: config.node_size.min,
                fill: color_of(&coarse_colors, coarse_id)?,
            });
        }

        let largest = groups.largest_group();
        debug!("coarse node member counts span 1..={largest}");
        let mut coarse_nodes = Vec::with_capacity(coarse.node_count());
        for id in coarse.nodes() {
            let members = groups.members(id).ok_or_else(|| {
                VizError::mapping(MappingIssue::CoarseNodeWithoutMembers(id.to_owned()))
            })?;
            coarse_nodes.push(SceneNode {
                id: id.to_owned(),
                position: position_of(
                    &coarse_positions,
                    id,
                    MappingIssue::CoarseNodeWithoutMembers,
                )?,
                size: config
                    .node_size
                    .map(members.len() as f64, 1.0, largest as f64),
                fill: color_of(&coarse_colors, id)?,
            });
        }

        for node in &coarse_nodes {
            debug!(
                "coarse node {} at ({:.3}, {:.3}), size {:.1}",
                node.id, node.position.x, node.position.y, node.size
            );
        }

        Ok(Self {
            title: config.title.clone(),
            fine: PanelScene {
                title: FINE_PANEL_TITLE,
                nodes: fine_nodes,
                edges: scene_edges(
                    fine,
                    &fine_positions,
                    config.linewidth,
                    MappingIssue::FineNodeNotInGraph,
                )?,
            },
            coarse: PanelScene {
                title: COARSE_PANEL_TITLE,
                nodes: coarse_nodes,
                edges: scene_edges(
                    coarse,
                    &coarse_positions,
                    config.linewidth,
                    MappingIssue::CoarseNodeWithoutMembers,
                )?,
            },
            edge_color: config.edge_color,
            node_border_color: config.node_border_color,
        })
    }
}

/// Colors per coarse node, in group order.
///
/// All-colorful mode splits the palette over every coarse node. Otherwise
/// only coarse nodes with more than one member draw from the palette and
/// singletons get `neutral`.
pub fn assign_coarse_colors(
    groups: &CoarseGroups,
    palette: Palette,
    all_colorful: bool,
    neutral: Color32,
) -> HashMap<String, Color32> {
    if all_colorful {
        let colors = palette.evenly_spaced(groups.len());
        debug!("palette {palette} split into {} colors", colors.len());
        return groups
            .iter()
            .zip(colors)
            .map(|((coarse_id, _), color)| (coarse_id.to_owned(), color))
            .collect();
    }

    let colors = palette.evenly_spaced(groups.merged_count());
    debug!("palette {palette} split into {} colors", colors.len());
    let mut next_color = colors.into_iter();
    groups
        .iter()
        .map(|(coarse_id, members)| {
            let color = if members.len() > 1 {
                next_color.next().unwrap_or(neutral)
            } else {
                neutral
            };
            (coarse_id.to_owned(), color)
        })
        .collect()
}

fn scene_edges(
    graph: &NodeLinkGraph,
    positions: &Positions,
    linewidth: VisualRange,
    missing: fn(String) -> MappingIssue,
) -> Result<Vec<SceneEdge>> {
    let Some((min_weight, max_weight)) = graph.weight_range() else {
        return Ok(Vec::new());
    };
    debug!("edge weights span {min_weight}..={max_weight}");

    graph
        .weighted_edges()
        .map(|edge| {
            Ok(SceneEdge {
                from: position_of(positions, edge.source, missing)?,
                to: position_of(positions, edge.target, missing)?,
                width: linewidth.map(edge.weight, min_weight, max_weight),
            })
        })
        .collect()
}

fn position_of(
    positions: &Positions,
    id: &str,
    missing: fn(String) -> MappingIssue,
) -> Result<Vec2> {
    positions
        .get(id)
        .copied()
        .ok_or_else(|| VizError::mapping(missing(id.to_owned())))
}

fn color_of(colors: &HashMap<String, Color32>, coarse_id: &str) -> Result<Color32> {
    colors.get(coarse_id).copied().ok_or_else(|| {
        VizError::mapping(MappingIssue::CoarseNodeNotInGraph(coarse_id.to_owned()))
    })
}
