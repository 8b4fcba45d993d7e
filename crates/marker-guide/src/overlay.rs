use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::guidance::Guidance;

/// An RGB colour.
pub type Rgb = [u8; 3];

/// Colours and sizes of the guidance overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Colour of the status text when no attention is needed.
    pub ok_color: Rgb,
    /// Colour of the status text when the operator must act.
    pub alert_color: Rgb,
    /// Colour of the frame center point.
    pub frame_center_color: Rgb,
    /// Colour of the marker centroid point.
    pub marker_center_color: Rgb,
    /// Colour of the line joining both centers.
    pub line_color: Rgb,
    /// Colour of the detected marker outlines.
    pub outline_color: Rgb,
    /// Radius of the center points in pixels.
    pub point_radius: f32,
    /// Thickness of the center line in pixels.
    pub line_thickness: f32,
    /// Thickness of the marker outlines in pixels.
    pub outline_thickness: f32,
    /// Top-left anchor of the status text.
    pub text_origin: Vec2,
    /// Font scale of the status text.
    pub text_scale: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            ok_color: [0, 255, 0],
            alert_color: [255, 0, 0],
            frame_center_color: [0, 255, 255],
            marker_center_color: [255, 0, 0],
            line_color: [255, 255, 0],
            outline_color: [0, 255, 0],
            point_radius: 8.0,
            line_thickness: 4.0,
            outline_thickness: 1.0,
            text_origin: Vec2::new(10.0, 50.0),
            text_scale: 3.0,
        }
    }
}

/// A single drawing instruction for the display collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled point.
    Point {
        /// Center of the point.
        position: Vec2,
        /// Radius in pixels.
        radius: f32,
        /// Fill colour.
        color: Rgb,
    },
    /// A straight segment.
    Line {
        /// Start of the segment.
        from: Vec2,
        /// End of the segment.
        to: Vec2,
        /// Thickness in pixels.
        thickness: f32,
        /// Stroke colour.
        color: Rgb,
    },
    /// A closed marker outline with its id as label.
    Polygon {
        /// The corners, closed implicitly from the last to the first.
        corners: [Vec2; 4],
        /// Text attached to the outline.
        label: String,
        /// Thickness in pixels.
        thickness: f32,
        /// Stroke colour.
        color: Rgb,
    },
    /// A line of text.
    Text {
        /// Top-left anchor of the text.
        origin: Vec2,
        /// The text itself.
        text: String,
        /// Font scale.
        scale: f32,
        /// Text colour.
        color: Rgb,
    },
}

/// The ordered drawing instructions for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    /// Commands in painting order.
    pub commands: Vec<DrawCommand>,
}

impl Overlay {
    /// Build the overlay of a frame.
    ///
    /// When a marker guides the frame, the frame center, the marker centroid and the line
    /// between them come first. Every detected marker that passed the perimeter filter is
    /// then outlined, and the status text is painted last.
    ///
    /// # Arguments
    ///
    /// * `guidance` - The guidance decision of the frame.
    /// * `style` - The colours and sizes to use.
    pub fn build(guidance: &Guidance, style: &OverlayStyle) -> Self {
        let mut commands = Vec::with_capacity(guidance.markers.len() + 4);

        if let Some(marker) = &guidance.marker {
            commands.push(DrawCommand::Point {
                position: guidance.frame_center,
                radius: style.point_radius,
                color: style.frame_center_color,
            });
            commands.push(DrawCommand::Point {
                position: marker.centroid,
                radius: style.point_radius,
                color: style.marker_center_color,
            });
            commands.push(DrawCommand::Line {
                from: guidance.frame_center,
                to: marker.centroid,
                thickness: style.line_thickness,
                color: style.line_color,
            });
        }

        commands.extend(guidance.markers.iter().map(|m| DrawCommand::Polygon {
            corners: m.corners,
            label: m.id.to_string(),
            thickness: style.outline_thickness,
            color: style.outline_color,
        }));

        commands.push(DrawCommand::Text {
            origin: style.text_origin,
            text: guidance.status.text.clone(),
            scale: style.text_scale,
            color: if guidance.status.alert {
                style.alert_color
            } else {
                style.ok_color
            },
        });

        Self { commands }
    }

    /// Iterate the point commands as `(position, radius, color)`.
    pub fn points(&self) -> impl Iterator<Item = (Vec2, f32, Rgb)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Point {
                position,
                radius,
                color,
            } => Some((*position, *radius, *color)),
            _ => None,
        })
    }

    /// Iterate the line commands as `(from, to, thickness, color)`.
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, f32, Rgb)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line {
                from,
                to,
                thickness,
                color,
            } => Some((*from, *to, *thickness, *color)),
            _ => None,
        })
    }

    /// Iterate the polygon commands as `(corners, label, thickness, color)`.
    pub fn polygons(&self) -> impl Iterator<Item = (&[Vec2; 4], &str, f32, Rgb)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polygon {
                corners,
                label,
                thickness,
                color,
            } => Some((corners, label.as_str(), *thickness, *color)),
            _ => None,
        })
    }

    /// The status text command, if any, as `(origin, text, scale, color)`.
    pub fn text(&self) -> Option<(Vec2, &str, f32, Rgb)> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text {
                origin,
                text,
                scale,
                color,
            } => Some((*origin, text.as_str(), *scale, *color)),
            _ => None,
        })
    }
}
