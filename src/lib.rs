//! HoleMask rasterizes simple vector paths into alpha-hole masks and reveals the holes with a
//! guided fill animation.
//!
//! The crate is organized around three components:
//!
//! - [`HoleMask`]: an opaque raster with one transparent hole per configured path
//! - [`HoleWriter`]: a [`HoleMask`] whose holes are painted over along median paths, one tick at
//!   a time
//! - [`DrawBoard`]: a free-hand canvas stamping a round brush at pointer positions
//!
//! Frames leave the crate through a [`SurfaceSink`]; [`drive_fill`] runs a writer's animation
//! into one at a fixed frame rate.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod component;
mod config;
mod encode;
mod fill;
mod foundation;
mod paint;
mod path;
mod raster;
mod session;

pub use crate::foundation::core::{Canvas, PixelCoord, Point, Rgba8, Vec2};
pub use crate::foundation::error::{HoleMaskError, HoleMaskResult};

pub use crate::path::command::PathCommand;
pub use crate::path::parser::{
    DEFAULT_SAMPLE_COUNT, MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT, PathParser, parse_commands,
    quad_point,
};
pub use crate::path::polyline::Polyline;

pub use crate::raster::buffer::{FrameRGBA, PaintBuffer, PixelBuffer, RasterMask};
pub use crate::raster::mapping::CoordMap;
pub use crate::raster::scanline::{PixelRegion, rasterize, scan_fill};

pub use crate::fill::animator::{FillAnimator, FillJob, FillStatus, FillTick};
pub use crate::fill::planner::{FillOrder, MIN_SEGMENT_LEN, ProgressedPixel, plan_fill_order};

pub use crate::paint::canvas::{clear, local_to_texel, stamp};

pub use crate::config::model::{DrawBoardConfig, JsonConfig, MaskConfig, WriterConfig};

pub use crate::component::draw_board::DrawBoard;
pub use crate::component::hole_mask::HoleMask;
pub use crate::component::hole_writer::HoleWriter;

pub use crate::encode::png::{PngSink, save_png};
pub use crate::encode::sink::{InMemorySink, SurfaceSink};
pub use crate::session::fill_session::{DriveStats, drive_fill};
