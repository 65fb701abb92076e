use crate::{
    component::hole_writer::HoleWriter,
    encode::sink::SurfaceSink,
    fill::animator::FillStatus,
    foundation::error::{HoleMaskError, HoleMaskResult},
};

/// Summary of a [`drive_fill`] run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriveStats {
    /// Ticks advanced.
    pub ticks: u64,
    /// Frames handed to the sink, including the initial mask.
    pub uploads: u64,
    /// Whether the animation ran to completion.
    pub finished: bool,
}

/// Run an initialized writer's fill animation at a fixed frame delta, presenting frames to `sink`.
///
/// The initial mask is uploaded first, then one frame after every tick that wrote pixels. Stops
/// when the animation finishes or is cancelled, or after `max_ticks` ticks.
#[tracing::instrument(skip(writer, sink))]
pub fn drive_fill(
    writer: &mut HoleWriter,
    dt: f64,
    max_ticks: Option<u64>,
    sink: &mut dyn SurfaceSink,
) -> HoleMaskResult<DriveStats> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(HoleMaskError::validation(
            "frame delta must be finite and greater than 0",
        ));
    }

    let mut stats = DriveStats {
        ticks: 0,
        uploads: 0,
        finished: false,
    };

    sink.upload(&writer.frame())?;
    stats.uploads += 1;

    while max_ticks.is_none_or(|max| stats.ticks < max) {
        let tick = writer.tick(dt)?;
        stats.ticks += 1;

        if tick.wrote_pixels() {
            sink.upload(&writer.frame())?;
            stats.uploads += 1;
        }

        match tick.status {
            FillStatus::Running { .. } => {}
            FillStatus::Finished => {
                stats.finished = true;
                break;
            }
            FillStatus::Cancelled => break,
        }
    }

    sink.finish()?;
    tracing::debug!(
        ticks = stats.ticks,
        uploads = stats.uploads,
        finished = stats.finished,
        "fill session done"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/session/fill_session.rs"]
mod tests;
