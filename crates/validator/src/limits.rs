//! Per-format size limits.

use qr_request_domain::Format;

/// Size cap for raster formats that the image endpoint renders in memory.
pub const RASTER_MAX_SIZE: u32 = 1_000;

/// Size cap for every other format (effectively unbounded).
pub const UNBOUNDED_MAX_SIZE: u32 = 1_000_000;

/// Largest accepted width/height, in pixels, for `format`.
///
/// Only `png`, `gif` and `jpeg` are capped; `jpg` is accepted as a format
/// but falls under the unbounded limit.
#[must_use]
pub const fn max_size_for_format(format: Format) -> u32 {
    match format {
        Format::Png | Format::Gif | Format::Jpeg => RASTER_MAX_SIZE,
        Format::Jpg | Format::Svg | Format::Eps => UNBOUNDED_MAX_SIZE,
    }
}
