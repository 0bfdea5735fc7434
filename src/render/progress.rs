//! Progress map: stations and, while the solver runs, its iterations.

use log::debug;

use super::{MapSurface, MarkerStyle, draw_base_layers, style};
use crate::domain::{IterationState, MapWindow, StationSet};
use crate::error::AppError;
use crate::projection::Projection;

/// Draw the station map over `window`.
///
/// With `iteration` set, the solver's guesses are overlaid:
/// - `iterate == 1`: the initial guess alone (green)
/// - `iterate > 1`: the initial guess (green) and guesses `1..iterate` (red)
/// - always: the guess at `iterate` (blue), drawn last
///
/// The title is "Map of seismic stations" without iteration state and
/// "After {iterate} Iterations" with it.
pub fn draw_progress_map<S: MapSurface + ?Sized>(
    surface: &mut S,
    stations: &StationSet,
    window: &MapWindow,
    iteration: Option<IterationState<'_>>,
) -> Result<(), AppError> {
    if let Some(state) = iteration {
        if state.iterate >= state.trace.len() {
            return Err(AppError::input(format!(
                "Iteration {} is out of range for a trace of {} guesses.",
                state.iterate,
                state.trace.len()
            )));
        }
    }

    let projection = Projection::for_window(window);
    debug!(
        "progress map: ll={:?} ur={:?} stations={} iterate={:?}",
        projection.llcrnr,
        projection.urcrnr,
        stations.len(),
        iteration.map(|s| s.iterate)
    );

    surface.set_projection(projection)?;
    draw_base_layers(surface)?;

    let xy = projection.project_all(stations.iter().map(|s| &s.location));
    surface.scatter(&xy, MarkerStyle::diamond(style::STATION_COLOR))?;
    for (station, &at) in stations.iter().zip(&xy) {
        surface.annotate(&station.name, at, style::STATION_LABEL_OFFSET, style::STATION_COLOR)?;
    }

    let title = match iteration {
        Some(state) => {
            let guesses = &state.trace.guesses;
            let iterate = state.iterate;

            if iterate >= 1 {
                let initial = projection.project(guesses[0]);
                surface.scatter(&[initial], MarkerStyle::diamond(style::INITIAL_GUESS_COLOR))?;
            }
            if iterate > 1 {
                let between = projection.project_all(&guesses[1..iterate]);
                surface.scatter(&between, MarkerStyle::diamond(style::INTERMEDIATE_COLOR))?;
            }
            let current = projection.project(guesses[iterate]);
            surface.scatter(&[current], MarkerStyle::diamond(style::CURRENT_COLOR))?;

            style::iteration_title(iterate)
        }
        None => style::PROGRESS_TITLE.to_string(),
    };
    surface.set_title(&title)
}
