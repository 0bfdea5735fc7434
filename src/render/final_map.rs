//! Final-result map: tight window around the estimate with its error ellipse.

use log::debug;

use super::{FillStyle, MapSurface, MarkerStyle, draw_base_layers, style};
use crate::domain::{ErrorEllipse, GeoPoint, MapWindow, TimeEstimate};
use crate::error::AppError;
use crate::projection::Projection;

/// Draw the final estimate at `center`.
///
/// The window is always `center ± (3°, 2°)`, whatever window the progress
/// maps used. When `time` is given, the estimate is labelled with
/// `t = {time} ± {uncertainty}s`. The ellipse is emitted last so it sits above
/// every other layer.
pub fn draw_final_map<S: MapSurface + ?Sized>(
    surface: &mut S,
    center: GeoPoint,
    semi_major: f64,
    semi_minor: f64,
    rotation_deg: f64,
    time: Option<TimeEstimate>,
) -> Result<(), AppError> {
    let projection = Projection::for_window(&MapWindow::final_zoom(center));
    debug!(
        "final map: center=({:.3}, {:.3}) axes=({semi_major}, {semi_minor}) rot={rotation_deg} time={:?}",
        center.lon, center.lat, time
    );

    surface.set_projection(projection)?;
    draw_base_layers(surface)?;

    let at = projection.project(center);
    surface.scatter(&[at], MarkerStyle::diamond(style::CURRENT_COLOR))?;

    if let Some(estimate) = time {
        surface.annotate(&estimate.label(), at, style::TIME_LABEL_OFFSET, style::TIME_LABEL_COLOR)?;
    }

    let ellipse = ErrorEllipse {
        center,
        semi_major,
        semi_minor,
        rotation_deg,
    };
    surface.add_ellipse(
        &ellipse,
        FillStyle {
            color: style::ELLIPSE_COLOR,
            alpha: style::ELLIPSE_ALPHA,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, Scene};

    fn render(center: GeoPoint, time: Option<TimeEstimate>) -> Scene {
        let mut scene = Scene::new();
        draw_final_map(&mut scene, center, 0.5, 0.25, 30.0, time).unwrap();
        scene
    }

    #[test]
    fn window_is_fixed_around_center() {
        for center in [GeoPoint::new(0.0, 0.0), GeoPoint::new(-155.25, 19.5), GeoPoint::new(140.0, -38.0)] {
            let p = render(center, None).projection().unwrap();
            assert_eq!(p.llcrnr, (center.lon - 3.0, center.lat - 2.0));
            assert_eq!(p.urcrnr, (center.lon + 3.0, center.lat + 2.0));
        }
    }

    #[test]
    fn time_label_only_when_present() {
        let center = GeoPoint::new(-118.0, 35.0);
        assert!(render(center, None).annotations().is_empty());
        assert!(render(center, TimeEstimate::from_sentinel(5.0, 0.0)).annotations().is_empty());

        let scene = render(center, TimeEstimate::from_sentinel(5.0, 1.2));
        assert_eq!(scene.annotations(), vec![("t = 5.00 ± 1.20s", (-118.0, 35.0))]);
    }

    #[test]
    fn time_label_offset_and_color() {
        let scene = render(GeoPoint::new(-118.0, 35.0), Some(TimeEstimate::new(5.0, 1.2)));
        let label = scene
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Annotate { offset, color, .. } => Some((*offset, *color)),
                _ => None,
            })
            .unwrap();
        assert_eq!((label.0.dx, label.0.dy), (-100.0, -15.0));
        assert_eq!(label.1, style::BLACK);
    }

    #[test]
    fn explicit_zero_time_is_labelled() {
        let scene = render(GeoPoint::new(1.0, 2.0), Some(TimeEstimate::new(0.0, 0.5)));
        assert_eq!(scene.annotations(), vec![("t = 0.00 ± 0.50s", (1.0, 2.0))]);
    }

    #[test]
    fn center_is_marked() {
        let scene = render(GeoPoint::new(12.5, 42.0), None);
        assert_eq!(scene.markers(style::CURRENT_COLOR), vec![(12.5, 42.0)]);
    }

    #[test]
    fn ellipse_is_drawn_above_everything() {
        let scene = render(GeoPoint::new(12.5, 42.0), Some(TimeEstimate::new(3.0, 0.1)));
        let cmds = scene.commands();
        let last_base = cmds.iter().rposition(DrawCommand::is_base_layer).unwrap();
        let ellipse_at = cmds
            .iter()
            .position(|c| matches!(c, DrawCommand::Ellipse { .. }))
            .unwrap();
        assert!(ellipse_at > last_base);
        assert_eq!(ellipse_at, cmds.len() - 1);

        let ellipses = scene.ellipses();
        assert_eq!(ellipses.len(), 1);
        let (e, fill) = ellipses[0];
        assert_eq!(e.center, GeoPoint::new(12.5, 42.0));
        assert_eq!((e.semi_major, e.semi_minor, e.rotation_deg), (0.5, 0.25, 30.0));
        assert_eq!(fill.alpha, 0.4);
        assert_eq!(fill.color, style::ELLIPSE_COLOR);
        assert_eq!(fill.color, style::BLUE);
    }

    #[test]
    fn final_map_has_no_title() {
        assert_eq!(render(GeoPoint::new(0.0, 0.0), None).title(), None);
    }
}
