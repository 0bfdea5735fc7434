//! Plotters-powered SVG rendering of a recorded map scene.
//!
//! The renderer records into a [`Scene`]; this module replays it onto a
//! Plotters chart whose data coordinates are the projection's lon/lat bounds,
//! resolving base-map commands against a [`BaseMap`]. Output goes into an
//! in-memory SVG document so the caller decides where it ends up.
//!
//! Layer stacking follows fixed z-orders rather than call order: the
//! land/ocean mask sits at the bottom, border and coastline strokes above it,
//! markers and labels above those, and the error ellipse on top. Markers and
//! labels anchored outside the window are not drawn.

use log::debug;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::basemap::{BaseMap, LayerGeometry};
use crate::error::AppError;
use crate::math::{ELLIPSE_SEGMENTS, ellipse_outline};
use crate::projection::{Projection, clip_polygon, clip_polyline};
use crate::render::{DrawCommand, LabelOffset, MarkerShape, Rgb, Scene, style};

/// Matplotlib's default 6.4in x 4.8in figure at 100 dpi.
pub const DEFAULT_SIZE: (u32, u32) = (640, 480);

/// SVG user units per typographic point.
const PX_PER_POINT: f64 = 96.0 / 72.0;
const MARKER_RADIUS: i32 = 5;
const LABEL_FONT_PX: u32 = 13;
const TITLE_FONT_PX: u32 = 16;
const MARGIN: u32 = 10;

type MapChart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

fn render_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::render(format!("Failed to draw map: {e}"))
}

/// Stacking order of a command; higher draws later.
fn z_order(cmd: &DrawCommand) -> u8 {
    match cmd {
        DrawCommand::SetProjection(_) | DrawCommand::Title(_) | DrawCommand::LandOcean { .. } => 0,
        DrawCommand::States | DrawCommand::Countries | DrawCommand::Coastlines => 1,
        DrawCommand::Scatter { .. } | DrawCommand::Annotate { .. } => 2,
        DrawCommand::Ellipse { .. } => 10,
    }
}

/// Render `scene` to an SVG document of `size` pixels.
///
/// Only the commands after the scene's last projection are drawn, so a
/// reused scene renders its latest map.
pub fn render_svg(scene: &Scene, basemap: &BaseMap, size: (u32, u32)) -> Result<String, AppError> {
    let commands = scene.commands();
    let (start, projection) = commands
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, c)| match c {
            DrawCommand::SetProjection(p) => Some((i, *p)),
            _ => None,
        })
        .ok_or_else(|| AppError::render("Scene has no projection; nothing to render."))?;
    if !projection.is_valid() {
        return Err(AppError::render(format!(
            "Invalid map bounds: {:?} to {:?}.",
            projection.llcrnr, projection.urcrnr
        )));
    }

    let title = commands[start..].iter().rev().find_map(|c| match c {
        DrawCommand::Title(t) => Some(t.as_str()),
        _ => None,
    });

    let mut layers: Vec<&DrawCommand> = commands[start..].iter().collect();
    layers.sort_by_key(|c| z_order(c));

    debug!(
        "rendering svg {}x{}: {} commands, title={:?}",
        size.0,
        size.1,
        layers.len(),
        title
    );

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(MARGIN);
        if let Some(title) = title {
            builder.caption(title, ("sans-serif", TITLE_FONT_PX));
        }
        let mut chart = builder
            .build_cartesian_2d(projection.x_range(), projection.y_range())
            .map_err(render_err)?;

        for cmd in layers {
            draw_command(&mut chart, cmd, basemap, &projection)?;
        }

        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

fn draw_command(
    chart: &mut MapChart<'_, '_>,
    cmd: &DrawCommand,
    basemap: &BaseMap,
    projection: &Projection,
) -> Result<(), AppError> {
    match cmd {
        DrawCommand::SetProjection(_) | DrawCommand::Title(_) => Ok(()),
        DrawCommand::States => draw_outlines(chart, &basemap.states, projection),
        DrawCommand::Countries => draw_outlines(chart, &basemap.countries, projection),
        DrawCommand::Coastlines => draw_outlines(chart, &basemap.coastlines, projection),
        DrawCommand::LandOcean { land, ocean } => {
            chart.plotting_area().fill(&rgb(*ocean)).map_err(render_err)?;
            let fill = rgb(*land).filled();
            chart
                .draw_series(
                    basemap
                        .land
                        .rings
                        .iter()
                        .map(|ring| clip_polygon(ring, projection))
                        .filter(|ring| !ring.is_empty())
                        .map(|ring| Polygon::new(ring, fill)),
                )
                .map_err(render_err)?;
            Ok(())
        }
        DrawCommand::Scatter { points, style } => {
            let color = rgb(style.color).filled();
            let r = MARKER_RADIUS;
            let visible = points.iter().copied().filter(|&(x, y)| projection.contains(x, y));
            match style.shape {
                MarkerShape::Diamond => {
                    chart
                        .draw_series(visible.map(|p| {
                            EmptyElement::at(p) + Polygon::new(vec![(0, -r), (r, 0), (0, r), (-r, 0)], color)
                        }))
                        .map_err(render_err)?;
                }
            }
            Ok(())
        }
        DrawCommand::Annotate {
            text,
            at,
            offset,
            color,
        } => {
            if !projection.contains(at.0, at.1) {
                return Ok(());
            }
            let (dx, dy) = offset_px(*offset);
            let font = ("sans-serif", LABEL_FONT_PX).into_font().color(&rgb(*color));
            chart
                .draw_series(std::iter::once(
                    EmptyElement::at(*at) + Text::new(text.clone(), (dx, dy), font),
                ))
                .map_err(render_err)?;
            Ok(())
        }
        DrawCommand::Ellipse { ellipse, fill } => {
            let outline = clip_polygon(&ellipse_outline(ellipse, ELLIPSE_SEGMENTS), projection);
            if outline.is_empty() {
                return Ok(());
            }
            let color = rgb(fill.color).mix(fill.alpha).filled();
            chart
                .draw_series(std::iter::once(Polygon::new(outline, color)))
                .map_err(render_err)?;
            Ok(())
        }
    }
}

/// Label offset in SVG pixels. Offsets are in points with y up; SVG pixels
/// grow downward.
fn offset_px(offset: LabelOffset) -> (i32, i32) {
    (
        (offset.dx * PX_PER_POINT).round() as i32,
        (-offset.dy * PX_PER_POINT).round() as i32,
    )
}

fn draw_outlines(
    chart: &mut MapChart<'_, '_>,
    layer: &LayerGeometry,
    projection: &Projection,
) -> Result<(), AppError> {
    let stroke = rgb(style::BORDER).stroke_width(1);
    chart
        .draw_series(
            layer
                .outlines()
                .flat_map(|line| clip_polyline(line, projection))
                .map(|piece| PathElement::new(piece, stroke)),
        )
        .map_err(render_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basemap::parse_layer;
    use crate::domain::{GeoPoint, IterationState, IterationTrace, MapWindow, StationSet, TimeEstimate};
    use crate::render::{MapSurface, draw_final_map, draw_progress_map};

    fn stations() -> StationSet {
        StationSet::from_columns(&[35.0, 36.5], &[-118.0, -116.5], &["PAS", "GSC"]).unwrap()
    }

    #[test]
    fn progress_map_svg_has_title_and_labels() {
        let trace = IterationTrace::from_columns(&[-117.0, -117.2, -117.4], &[35.5, 35.6, 35.7]).unwrap();
        let mut scene = Scene::new();
        draw_progress_map(
            &mut scene,
            &stations(),
            &MapWindow::new(GeoPoint::new(-117.0, 35.5), 4.0, 3.0),
            Some(IterationState::new(2, &trace)),
        )
        .unwrap();

        let svg = render_svg(&scene, &BaseMap::empty(), DEFAULT_SIZE).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("After 2 Iterations"));
        assert!(svg.contains("PAS"));
        assert!(svg.contains("GSC"));
    }

    #[test]
    fn final_map_svg_has_time_label_and_ellipse() {
        let mut scene = Scene::new();
        draw_final_map(&mut scene, GeoPoint::new(-117.0, 35.5), 0.4, 0.2, 15.0, Some(TimeEstimate::new(5.0, 1.2)))
            .unwrap();
        let svg = render_svg(&scene, &BaseMap::empty(), DEFAULT_SIZE).unwrap();
        assert!(svg.contains("t = 5.00 ± 1.20s"));
        assert!(svg.contains("<polygon"));
    }

    #[test]
    fn base_layers_are_drawn_from_geometry() {
        let basemap = BaseMap {
            coastlines: parse_layer(r#"{"type": "LineString", "coordinates": [[-120, 34], [-114, 37]]}"#).unwrap(),
            land: parse_layer(r#"{"type": "Polygon", "coordinates": [[[-125,30],[-110,30],[-110,40],[-125,30]]]}"#)
                .unwrap(),
            ..BaseMap::empty()
        };
        let mut scene = Scene::new();
        draw_progress_map(&mut scene, &stations(), &MapWindow::new(GeoPoint::new(-117.0, 35.5), 4.0, 3.0), None)
            .unwrap();
        let with_geo = render_svg(&scene, &basemap, DEFAULT_SIZE).unwrap();
        let without = render_svg(&scene, &BaseMap::empty(), DEFAULT_SIZE).unwrap();
        assert!(with_geo.contains("<polyline"));
        assert!(with_geo.len() > without.len());
        assert!(with_geo.contains("Map of seismic stations"));
    }

    #[test]
    fn scene_without_projection_is_an_error() {
        let mut scene = Scene::new();
        scene.set_title("orphan").unwrap();
        let err = render_svg(&scene, &BaseMap::empty(), DEFAULT_SIZE).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_RENDER);
    }

    #[test]
    fn degenerate_window_is_an_error() {
        let mut scene = Scene::new();
        draw_progress_map(&mut scene, &StationSet::default(), &MapWindow::new(GeoPoint::new(0.0, 0.0), 0.0, 0.0), None)
            .unwrap();
        assert!(render_svg(&scene, &BaseMap::empty(), DEFAULT_SIZE).is_err());
    }

    #[test]
    fn markers_and_labels_outside_window_are_skipped() {
        let stations = StationSet::from_columns(&[0.0, 80.0], &[0.0, 100.0], &["NEARBY", "FARAWAY"]).unwrap();
        let mut scene = Scene::new();
        draw_progress_map(&mut scene, &stations, &MapWindow::new(GeoPoint::new(0.0, 0.0), 5.0, 5.0), None).unwrap();

        let svg = render_svg(&scene, &BaseMap::empty(), DEFAULT_SIZE).unwrap();
        assert!(svg.contains("NEARBY"));
        assert!(!svg.contains("FARAWAY"));
        // Only the in-window station gets a diamond.
        assert_eq!(svg.matches("<polygon").count(), 1);
    }

    #[test]
    fn label_offsets_flip_to_svg_y_down() {
        assert_eq!(offset_px(style::STATION_LABEL_OFFSET), (-27, -7));
        assert_eq!(offset_px(style::TIME_LABEL_OFFSET), (-133, 20));
    }

    #[test]
    fn ellipse_draws_last() {
        let mut scene = Scene::new();
        draw_final_map(&mut scene, GeoPoint::new(0.0, 0.0), 1.0, 0.5, 0.0, None).unwrap();
        let mut layers: Vec<&DrawCommand> = scene.commands().iter().collect();
        layers.sort_by_key(|c| z_order(c));
        assert!(matches!(layers.last(), Some(DrawCommand::Ellipse { .. })));
        assert!(matches!(layers[1], DrawCommand::LandOcean { .. }));
    }
}
